use yew::prelude::*;

/// The app's top-level panels. The active tab persists across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Damage,
    About,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Damage, Self::About];

    /// Stable identifier used as the storage value.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Damage => "damage",
            Self::About => "about",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Damage => "Damage Check",
            Self::About => "About",
        }
    }

    /// Look a tab up by its stored id; unknown ids fall back to `None` so
    /// the caller can pick the default.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(p: &Props) -> Html {
    html! {
        <nav class="tab-bar" role="tablist" aria-label="Sections">
            { for Tab::ALL.into_iter().map(|tab| {
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(tab))
                };
                let is_active = tab == p.active;
                html! {
                    <button
                        class={classes!("tab-button", is_active.then_some("active"))}
                        role="tab"
                        aria-selected={if is_active { "true" } else { "false" }}
                        onclick={onclick}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("bogus"), None);
        assert_eq!(Tab::default(), Tab::Damage);
    }

    #[test]
    fn tab_bar_marks_the_active_tab() {
        let props = Props {
            active: Tab::About,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TabBar>::with_props(props).render());
        assert!(html.contains("Damage Check"));
        assert!(html.contains("About"));
        assert!(html.contains("active"));
    }
}

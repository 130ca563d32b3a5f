use yew::prelude::*;

use crate::components::modal::Modal;

const LINKS: [(&str, &str); 3] = [
    ("Official site", "https://pad.gungho.jp/"),
    ("Damage mechanics guide", "https://pad.wiki/damage-reduction"),
    ("Community wiki", "https://puzzleanddragons.fandom.com/"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(LinksPopup)]
pub fn links_popup(p: &Props) -> Html {
    html! {
        <Modal open={p.open} title="External links" on_close={p.on_close.clone()}>
            <ul class="links-list">
                { for LINKS.iter().map(|(label, url)| html! {
                    <li>
                        <a href={*url} target="_blank" rel="noopener noreferrer">
                            { *label }
                        </a>
                    </li>
                })}
            </ul>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn open_popup_lists_every_link() {
        let props = Props {
            open: true,
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LinksPopup>::with_props(props).render());
        for (label, url) in LINKS {
            assert!(html.contains(label));
            assert!(html.contains(url));
        }
    }

    #[test]
    fn closed_popup_renders_nothing() {
        let props = Props {
            open: false,
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LinksPopup>::with_props(props).render());
        assert!(!html.contains("links-list"));
    }
}

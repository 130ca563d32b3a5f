#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
use crate::components::ui::tab_bar::Tab;

#[cfg(target_arch = "wasm32")]
use crate::app::gate::Gate;
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::components::ui::notification_center::FeedState;

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct BootstrapHandles {
    table: UseStateHandle<Option<pazucal_core::DungeonTable>>,
    feed: UseStateHandle<FeedState>,
    unread: UseStateHandle<usize>,
    active_tab: UseStateHandle<Tab>,
}

/// Verify the stored session against the endpoint and pick the first gate.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn check_session() -> Gate {
    match crate::storage::load_credentials() {
        Some(creds) => {
            let result = crate::api::heartbeat(&creds).await;
            crate::app::gate::gate_after_heartbeat(&result)
        }
        None => Gate::login(),
    }
}

/// Load everything the app view needs once the gate is `Ready`.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn load_app_data(handles: BootstrapHandles) {
    crate::background::apply_random().await;

    let table = crate::data::fetch_json(crate::data::DUNGEON_TABLE).await;
    handles.table.set(table);

    match crate::data::fetch_json::<Vec<pazucal_core::Announcement>>(crate::data::ANNOUNCEMENTS)
        .await
    {
        Some(feed) => {
            let last_read = crate::storage::last_read_date();
            handles
                .unread
                .set(pazucal_core::unread_count(&feed, last_read.as_deref()));
            handles.feed.set(FeedState::Ready(feed));
        }
        None => handles.feed.set(FeedState::Failed),
    }
}

/// Restore the last active tab, falling back to the first tab.
#[cfg(any(target_arch = "wasm32", test))]
fn restore_tab(handle: &UseStateHandle<Tab>) {
    #[cfg(target_arch = "wasm32")]
    let saved = crate::storage::last_active_tab();
    #[cfg(not(target_arch = "wasm32"))]
    let saved: Option<String> = None;

    let tab = saved.as_deref().and_then(Tab::from_id).unwrap_or_default();
    handle.set(tab);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    {
        let gate = app_state.gate.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                gate.set(check_session().await);
            });
            || {}
        });
    }

    let handles = BootstrapHandles {
        table: app_state.table.clone(),
        feed: app_state.feed.clone(),
        unread: app_state.unread.clone(),
        active_tab: app_state.active_tab.clone(),
    };
    let gate_now = (*app_state.gate).clone();
    use_effect_with(gate_now, move |gate| {
        if *gate == Gate::Ready {
            restore_tab(&handles.active_tab);
            wasm_bindgen_futures::spawn_local(async move {
                load_app_data(handles).await;
            });
        }
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(RestoreHarness)]
    fn restore_harness() -> Html {
        let tab = use_state_eq(Tab::default);
        restore_tab(&tab);
        html! { <span>{ tab.id() }</span> }
    }

    #[test]
    fn tab_restore_falls_back_to_default() {
        let html = block_on(LocalServerRenderer::<RestoreHarness>::new().render());
        assert!(html.contains("damage"));
    }
}

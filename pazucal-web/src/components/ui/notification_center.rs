use pazucal_core::Announcement;
use yew::prelude::*;

use crate::components::modal::Modal;

pub const FAILURE_TEXT: &str = "Failed to load announcements.";
pub const EMPTY_TEXT: &str = "No announcements yet.";

/// Where the announcement fetch currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    /// Missing or malformed feed; show the fixed failure message.
    Failed,
    Ready(Vec<Announcement>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub feed: FeedState,
    pub on_close: Callback<()>,
}

#[function_component(NotificationCenter)]
pub fn notification_center(p: &Props) -> Html {
    let body = match &p.feed {
        FeedState::Loading => html! { <p class="muted">{ "Loading..." }</p> },
        FeedState::Failed => html! { <p class="notification-failure">{ FAILURE_TEXT }</p> },
        FeedState::Ready(items) if items.is_empty() => {
            html! { <p class="muted">{ EMPTY_TEXT }</p> }
        }
        FeedState::Ready(items) => html! {
            <div id="notification-list">
                { for items.iter().map(|item| html! {
                    <div class="notification-item">
                        <strong>{ item.date.clone() }</strong>
                        <p>{ item.content.clone() }</p>
                    </div>
                })}
            </div>
        },
    };

    html! {
        <Modal open={p.open} title="Announcements" on_close={p.on_close.clone()}>
            { body }
        </Modal>
    }
}

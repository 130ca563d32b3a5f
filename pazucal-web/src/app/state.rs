use pazucal_core::DungeonTable;
use yew::prelude::*;

use crate::app::gate::Gate;
use crate::components::ui::notification_center::FeedState;
use crate::components::ui::tab_bar::Tab;

#[derive(Clone)]
pub struct AppState {
    pub gate: UseStateHandle<Gate>,
    pub table: UseStateHandle<Option<DungeonTable>>,
    pub feed: UseStateHandle<FeedState>,
    pub unread: UseStateHandle<usize>,
    pub active_tab: UseStateHandle<Tab>,
    pub show_notifications: UseStateHandle<bool>,
    pub show_links: UseStateHandle<bool>,
    pub login_busy: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        gate: use_state(|| Gate::Checking),
        table: use_state(|| None::<DungeonTable>),
        feed: use_state(|| FeedState::Loading),
        unread: use_state(|| 0_usize),
        active_tab: use_state(Tab::default),
        show_notifications: use_state(|| false),
        show_links: use_state(|| false),
        login_busy: use_state(|| false),
    }
}

impl AppState {
    /// Whether the dungeon table arrived and has anything to select.
    #[must_use]
    pub fn table_ready(&self) -> bool {
        self.table.as_ref().is_some_and(|table| !table.is_empty())
    }
}

use pazucal_core::{Credentials, latest_date};
use yew::prelude::*;

use crate::app::gate::{Gate, MSG_LOGIN_FAILED, MSG_MISSING_FIELDS, MSG_OFFLINE};
use crate::app::state::AppState;
use crate::components::ui::notification_center::FeedState;
use crate::components::ui::tab_bar::Tab;

/// All the callbacks the view wires into components.
#[derive(Clone)]
pub struct AppHandlers {
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub select_tab: Callback<Tab>,
    pub open_notifications: Callback<()>,
    pub close_notifications: Callback<()>,
    pub open_links: Callback<()>,
    pub close_links: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            login: build_login(state),
            logout: build_logout(),
            select_tab: build_select_tab(state),
            open_notifications: build_open_notifications(state),
            close_notifications: build_close(&state.show_notifications),
            open_links: build_open(&state.show_links),
            close_links: build_close(&state.show_links),
        }
    }
}

fn build_login(state: &AppState) -> Callback<(String, String)> {
    let gate = state.gate.clone();
    let busy = state.login_busy.clone();
    Callback::from(move |(id, pass): (String, String)| {
        if id.is_empty() || pass.is_empty() {
            gate.set(Gate::login_with(MSG_MISSING_FIELDS));
            return;
        }
        busy.set(true);
        let gate = gate.clone();
        let busy = busy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let next = match crate::api::login(&id, &pass).await {
                Ok(resp) if resp.success => match resp.token {
                    Some(token) => {
                        crate::storage::save_credentials(&Credentials {
                            user_id: id,
                            token,
                        });
                        Gate::Ready
                    }
                    // A success without a token is a server bug; treat it
                    // like a rejection rather than storing half a session.
                    None => Gate::login_with(MSG_LOGIN_FAILED),
                },
                Ok(resp) => Gate::Login {
                    message: Some(resp.message.unwrap_or_else(|| MSG_LOGIN_FAILED.to_owned())),
                },
                Err(err) => {
                    log::error!("login request failed: {err}");
                    Gate::login_with(MSG_OFFLINE)
                }
            };
            busy.set(false);
            gate.set(next);
        });
    })
}

fn build_logout() -> Callback<()> {
    Callback::from(move |()| {
        if !crate::dom::confirm("Log out?") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(creds) = crate::storage::load_credentials() {
                if let Err(err) = crate::api::logout(&creds).await {
                    log::warn!("logout notification failed: {err}");
                }
            }
            crate::storage::clear_credentials();
            crate::dom::reload();
        });
    })
}

fn build_select_tab(state: &AppState) -> Callback<Tab> {
    let active_tab = state.active_tab.clone();
    Callback::from(move |tab: Tab| {
        crate::storage::set_last_active_tab(tab.id());
        active_tab.set(tab);
    })
}

fn build_open_notifications(state: &AppState) -> Callback<()> {
    let show = state.show_notifications.clone();
    let unread = state.unread.clone();
    let feed = state.feed.clone();
    Callback::from(move |()| {
        show.set(true);
        unread.set(0);
        if let FeedState::Ready(items) = &*feed {
            if let Some(date) = latest_date(items) {
                crate::storage::set_last_read_date(date);
            }
        }
    })
}

fn build_open(handle: &UseStateHandle<bool>) -> Callback<()> {
    let handle = handle.clone();
    Callback::from(move |()| handle.set(true))
}

fn build_close(handle: &UseStateHandle<bool>) -> Callback<()> {
    let handle = handle.clone();
    Callback::from(move |()| handle.set(false))
}

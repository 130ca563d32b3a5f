mod handlers;

pub use handlers::AppHandlers;

use yew::prelude::*;

use crate::app::gate::Gate;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::calculator_panel::CalculatorPanel;
use crate::components::ui::links_popup::LinksPopup;
use crate::components::ui::login_card::LoginCard;
use crate::components::ui::notification_center::NotificationCenter;
use crate::components::ui::tab_bar::{Tab, TabBar};

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);

    match &*state.gate {
        Gate::Checking => render_checking(),
        Gate::Login { message } => html! {
            <main id="main" role="main" class="login-layout">
                <LoginCard
                    message={message.clone()}
                    busy={*state.login_busy}
                    on_submit={handlers.login.clone()}
                />
            </main>
        },
        Gate::Ready => render_ready(state, &handlers),
    }
}

fn render_checking() -> Html {
    html! {
        <main id="main" role="main" class="boot-screen">
            <p class="muted">{ "Checking session..." }</p>
        </main>
    }
}

fn render_ready(state: &AppState, handlers: &AppHandlers) -> Html {
    let active = *state.active_tab;
    let panel = match active {
        Tab::Damage => html! {
            <CalculatorPanel table={(*state.table).clone()} />
        },
        Tab::About => render_about(),
    };

    html! {
        <>
            <Header
                unread={*state.unread}
                on_open_notifications={handlers.open_notifications.clone()}
                on_open_links={handlers.open_links.clone()}
                on_logout={handlers.logout.clone()}
            />
            <main id="main" role="main">
                <TabBar active={active} on_select={handlers.select_tab.clone()} />
                { panel }
                <NotificationCenter
                    open={*state.show_notifications}
                    feed={(*state.feed).clone()}
                    on_close={handlers.close_notifications.clone()}
                />
                <LinksPopup
                    open={*state.show_links}
                    on_close={handlers.close_links.clone()}
                />
                <Footer />
            </main>
        </>
    }
}

fn render_about() -> Html {
    html! {
        <section class="panel about-panel">
            <h2>{ "About" }</h2>
            <p>
                { "Pick a dungeon and floor, enter your damage reduction \
                   sources, and the table shows which enemy attacks your \
                   team can survive." }
            </p>
            <p class="muted">
                { "Damage tables are community-maintained and refresh on \
                   every load." }
            </p>
        </section>
    }
}

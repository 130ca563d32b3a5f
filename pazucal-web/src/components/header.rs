use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub unread: usize,
    pub on_open_notifications: Callback<()>,
    pub on_open_links: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_notifications = {
        let cb = p.on_open_notifications.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_links = {
        let cb = p.on_open_links.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let badge = if p.unread > 0 {
        html! { <span class="notification-badge">{ p.unread }</span> }
    } else {
        Html::default()
    };

    html! {
        <header role="banner">
            <div class="header-content">
                <h1 class="app-title">{ "PazuCal" }</h1>
                <div class="header-right">
                    <button
                        id="notification-btn"
                        class={classes!("bell-btn", (p.unread > 0).then_some("active"))}
                        aria-label="Announcements"
                        onclick={open_notifications}
                    >
                        { "\u{1F514}" }
                        { badge }
                    </button>
                    <button id="links-btn" onclick={open_links}>{ "Links" }</button>
                    <button id="logout-btn" onclick={logout}>{ "Log out" }</button>
                </div>
            </div>
        </header>
    }
}

use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Context message from the gate (expired session, server rejection).
    #[prop_or_default]
    pub message: Option<String>,
    /// True while a login request is in flight; disables the button.
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<(String, String)>,
}

#[function_component(LoginCard)]
pub fn login_card(p: &Props) -> Html {
    let user_id = use_state(String::new);
    let pass = use_state(String::new);

    let on_id_input = {
        let user_id = user_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                user_id.set(input.value());
            }
        })
    };
    let on_pass_input = {
        let pass = pass.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                pass.set(input.value());
            }
        })
    };
    let on_click = {
        let user_id = user_id.clone();
        let pass = pass.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |_| {
            cb.emit(((*user_id).clone(), (*pass).clone()));
        })
    };

    let status = if p.busy {
        html! { <p id="login-msg" class="muted">{ "Signing in..." }</p> }
    } else {
        p.message
            .as_ref()
            .map(|msg| html! { <p id="login-msg" class="login-error">{ msg.clone() }</p> })
            .unwrap_or_default()
    };

    html! {
        <section class="panel login-card" aria-label="Sign in">
            <h2>{ "Sign in" }</h2>
            <label for="login-id">{ "ID" }</label>
            <input
                id="login-id"
                type="text"
                autocomplete="username"
                value={(*user_id).clone()}
                oninput={on_id_input}
            />
            <label for="login-pass">{ "Password" }</label>
            <input
                id="login-pass"
                type="password"
                autocomplete="current-password"
                value={(*pass).clone()}
                oninput={on_pass_input}
            />
            <button id="login-button" disabled={p.busy} onclick={on_click}>
                { "Log in" }
            </button>
            { status }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_both_fields_and_button() {
        let props = Props {
            message: None,
            busy: false,
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginCard>::with_props(props).render());
        assert!(html.contains("login-id"));
        assert!(html.contains("login-pass"));
        assert!(html.contains("Log in"));
        assert!(!html.contains("login-error"));
    }

    #[test]
    fn shows_the_gate_message() {
        let props = Props {
            message: Some(String::from("Your session has expired.")),
            busy: false,
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginCard>::with_props(props).render());
        assert!(html.contains("Your session has expired."));
    }

    #[test]
    fn busy_state_disables_the_button() {
        let props = Props {
            message: None,
            busy: true,
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginCard>::with_props(props).render());
        assert!(html.contains("disabled"));
        assert!(html.contains("Signing in..."));
    }
}

use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <p class="muted">
                { "Fan-made tool. Not affiliated with the game's publisher." }
            </p>
        </footer>
    }
}

use yew::prelude::*;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: String,
}

#[function_component]
pub fn StartupError(props: &Props) -> Html {
    html! {
        <div class={BG_PAGE}>
            <div class={CARD}>
                <h2 class={HEADING_MD}>{"Unable to start"}</h2>
                <div class={alert_style("error")}>{&props.message}</div>
                <p class={TEXT_MUTED}>{"The configuration service could not be reached. Reload the page to try again."}</p>
            </div>
        </div>
    }
}

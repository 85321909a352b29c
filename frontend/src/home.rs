use std::rc::Rc;
use yew::prelude::*;
use shared::FrontendConfig;
use crate::styles::*;

#[function_component]
pub fn Home() -> Html {
    let config = use_context::<Rc<FrontendConfig>>();

    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"User Webapp"}</h1>
            <div class={CARD_SECTION}>
                <p class={TEXT_LABEL_SM}>{"User API endpoint"}</p>
                {match config {
                    Some(config) => html! {
                        <code class="text-blue-400 break-all">{config.user_api_endpoint()}</code>
                    },
                    None => html! { <p class={TEXT_ERROR}>{"Configuration not provided"}</p> },
                }}
            </div>
        </div>
    }
}

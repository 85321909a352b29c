use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use tracing::{error, info};
use shared::{ConfigLoader, FrontendConfig};

mod styles;
mod home;
mod startup_error;
mod config;

use crate::{
    config::{GlooConfigSource, LOADER_SETTINGS},
    home::Home,
    startup_error::{Props as StartupErrorProps, StartupError},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[not_found]
    #[at("/404")] NotFound,
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<FrontendConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<FrontendConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-gray-900">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<FrontendConfig>>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => html! { <Home /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    wasm_bindgen_futures::spawn_local(async {
        let mut loader = ConfigLoader::new(GlooConfigSource, LOADER_SETTINGS);
        match loader.load().await {
            Ok(config) => {
                info!("Starting user webapp");
                let config = Rc::new(config.clone());
                yew::Renderer::<App>::with_props(AppProps { config }).render();
            }
            Err(e) => {
                error!("Failed to load frontend configuration: {}", e);
                yew::Renderer::<StartupError>::with_props(StartupErrorProps { message: e.to_string() }).render();
            }
        }
    });
}

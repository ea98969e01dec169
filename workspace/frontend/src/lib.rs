use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod router;
pub mod settings;

use api_client::ApiClient;
use router::{switch, Route};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: ApiClient,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ApiClient> context={props.client.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Churn Prediction Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    let client = ApiClient::from_settings(&settings);
    log::debug!("API base URL: {}", client.base_url());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { client }).render();
    log::info!("Application initialized successfully");
}

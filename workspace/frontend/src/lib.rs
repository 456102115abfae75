use yew::prelude::*;

mod alert;
mod components;
pub mod api_client;
pub mod settings;

use components::estimator::Estimator;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-6">
                <span class="text-xl font-bold">{"İstanbul Kira Tahmini"}</span>
            </header>
            <main class="p-6 max-w-6xl mx-auto">
                <Estimator />
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Kira Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

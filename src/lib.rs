use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

/// Initialize the application environment.
///
/// Runs once at module load, before any mount call: panic messages go to the
/// console and the domain time provider is backed by the browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);
}

/// Convenience entry point: mount the default variant.
#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    presentation::wasm_api::mount_projection_app("boardroom")
}

use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

/// Install the panic hook and mount the dashboard. Logging services are
/// registered inside the root component, once the reactive runtime exists.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}

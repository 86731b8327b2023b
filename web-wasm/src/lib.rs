//! ARS Address Console (Leptos + WASM)

mod app;
mod api;
mod components;
mod export;
mod logging;
mod pages;
mod routes;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    log::info!("API Base URL: {}", api::api_config().base_url());
    leptos::mount::mount_to_body(app::App);
}

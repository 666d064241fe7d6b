//! Simple Mercari Frontend Entry Point

mod models;
mod config;
mod api;
mod loader;
mod logger;
mod context;
mod components;
mod app;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_env();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[main] Console logger not installed: {}", e).into());
    }
    log::info!("[main] Using item service at {}", config.base_url());

    mount_to_body(move || view! { <App config=config /> });
}

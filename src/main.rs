//! Task List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod inspect;
mod models;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::embedded().unwrap_or_else(|err| {
        log::error!("[APP] bad embedded config, using defaults: {}", err);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}

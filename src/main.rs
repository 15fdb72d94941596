//! Checklist Builder Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("Using default configuration: {}", err);
    }
    log::info!("Mounting checklist builder (log level {})", level);

    mount_to_body(move || view! { <App config=config /> });
}

//! Furima Ledger Frontend Entry Point

mod models;
mod error;
mod storage;
mod inventory;
mod stats;
mod backup;
mod config;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = logger::init(LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }
    let config = AppConfig::load(&BrowserStorage);
    log::set_max_level(config.level_filter());
    log::info!("[APP] Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

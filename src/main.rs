//! Club Roster Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod route;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use roster_core::MemberStore;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = console_logger::init(config.level()) {
        web_sys::console::error_1(&format!("[main] logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[config] {}; using defaults", e);
    }

    let members = config.build_store().unwrap_or_else(|e| {
        log::error!("[config] {}; using sample members", e);
        MemberStore::with_sample_data()
    });
    log::info!("[main] starting with {} members", members.snapshot().len());

    let title = config.title;
    mount_to_body(move || view! { <App title=title.clone() members=members.clone() /> });
}

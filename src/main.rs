#![allow(warnings)]
//! Fashion Radar Frontend Entry Point

mod domain;
mod repository;
mod favorites;
mod fixtures;
mod word_cloud;
mod format;
mod markdown;
mod config;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;
use repository::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load(&BrowserStorage);
    if console_log::init_with_level(config.log_level()).is_ok() {
        log::info!("[APP] Starting Fashion Radar (log level {})", config.log_level());
    }

    mount_to_body(move || view! { <App config=config /> });
}

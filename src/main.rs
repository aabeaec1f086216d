//! Record Admin Frontend Entry Point

mod models;
mod config;
mod store;
mod context;
mod commands;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("RecordAdmin", config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}

//! Frontend Configuration
//!
//! Values baked in at build time, e.g.
//! `RECORD_API_BASE_URL=https://api.example.com trunk build`.

use log::LevelFilter;
use record_sync::config::{ENV_BASE_URL, ENV_PAGE_SIZE, ENV_RESPONSE_ORDERING, ENV_TIMEOUT_SECS};
use record_sync::SyncConfig;

/// Page size options offered by the pagination bar
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 20, 50, 100];

/// How long a toast stays visible
pub const TOAST_MILLIS: u32 = 3_000;

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_BASE_URL => option_env!("RECORD_API_BASE_URL"),
        ENV_PAGE_SIZE => option_env!("RECORD_PAGE_SIZE"),
        ENV_RESPONSE_ORDERING => option_env!("RECORD_RESPONSE_ORDERING"),
        ENV_TIMEOUT_SECS => option_env!("RECORD_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load_config() -> SyncConfig {
    SyncConfig::from_lookup(build_env)
}

pub fn log_level() -> LevelFilter {
    match option_env!("RECORD_LOG_LEVEL") {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

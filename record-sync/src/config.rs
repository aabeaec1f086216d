//! Sync Configuration
//!
//! Endpoint location and list defaults, read from environment-style keys.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::ResponseOrdering;
use crate::domain::DEFAULT_PAGE_SIZE;

pub const ENV_BASE_URL: &str = "RECORD_API_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "RECORD_PAGE_SIZE";
pub const ENV_RESPONSE_ORDERING: &str = "RECORD_RESPONSE_ORDERING";
pub const ENV_TIMEOUT_SECS: &str = "RECORD_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Sync configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Root of the REST resource; `/data` is appended
    pub base_url: String,
    pub page_size: u32,
    pub ordering: ResponseOrdering,
    /// Request timeout, native builds only
    pub timeout_secs: Option<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            ordering: ResponseOrdering::default(),
            timeout_secs: None,
        }
    }
}

impl SyncConfig {
    /// Build from any key lookup; missing or unparsable values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        match lookup(ENV_PAGE_SIZE).map(|v| v.trim().parse::<u32>()) {
            Some(Ok(size)) if size > 0 => config.page_size = size,
            Some(_) => log::warn!("[CONFIG] ignoring invalid {}", ENV_PAGE_SIZE),
            None => {}
        }
        if let Some(raw) = lookup(ENV_RESPONSE_ORDERING) {
            match ResponseOrdering::parse(raw.trim()) {
                Some(ordering) => config.ordering = ordering,
                None => log::warn!("[CONFIG] ignoring invalid {}: {}", ENV_RESPONSE_ORDERING, raw),
            }
        }
        if let Some(Ok(secs)) = lookup(ENV_TIMEOUT_SECS).map(|v| v.trim().parse::<u64>()) {
            config.timeout_secs = Some(secs);
        }

        config
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

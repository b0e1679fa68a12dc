//! Monitoring loop timing and storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Loop cadence, backoff, and trait cache location.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Sleep between polls in milliseconds (default: 3000).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Sleep after a failed poll in milliseconds (default: 5000).
    #[serde(default = "default_error_backoff_ms")]
    pub error_backoff_ms: u64,
    /// Cap on remembered listings. Unbounded when unset.
    #[serde(default)]
    pub max_seen_listings: Option<usize>,
    /// Trait frequency cache file (default: `traits_cache.json`).
    #[serde(default = "default_trait_cache_path")]
    pub trait_cache_path: PathBuf,
}

const fn default_poll_interval_ms() -> u64 {
    3_000
}

const fn default_error_backoff_ms() -> u64 {
    5_000
}

fn default_trait_cache_path() -> PathBuf {
    PathBuf::from("traits_cache.json")
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            error_backoff_ms: default_error_backoff_ms(),
            max_seen_listings: None,
            trait_cache_path: default_trait_cache_path(),
        }
    }
}

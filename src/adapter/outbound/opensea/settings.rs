//! OpenSea API configuration.

use serde::Deserialize;

/// OpenSea REST API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSeaConfig {
    /// Base URL for the v2 REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Events requested per poll.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Timeout for the event poll in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Timeout for per-token metadata requests in milliseconds.
    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// API key, loaded from `OPENSEA_API_KEY` (never from the config file).
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.opensea.io/api/v2".into()
}

const fn default_page_size() -> u32 {
    25
}

const fn default_timeout_ms() -> u64 {
    5_000
}

const fn default_metadata_timeout_ms() -> u64 {
    15_000
}

fn default_user_agent() -> String {
    concat!("rarescout/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for OpenSeaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            timeout_ms: default_timeout_ms(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
            user_agent: default_user_agent(),
            api_key: None,
        }
    }
}

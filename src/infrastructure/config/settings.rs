//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file, then environment variables
//! override it. Secrets (`TELEGRAM_BOT_TOKEN`, `OPENSEA_API_KEY`) are only
//! ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use rarescout::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let settings = config.monitor_settings()?;
//!     println!("watching {}", settings.collection_slug);
//!     Ok(())
//! }
//! ```

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use super::collection::CollectionConfig;
use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::opensea::OpenSeaConfig;
use crate::domain::rarity::TotalSupply;
use crate::domain::threshold::{resolve_threshold, ScoreThreshold};
use crate::error::{ConfigError, Result};
use crate::infrastructure::orchestration::monitor::MonitorSettings;

pub const ENV_COLLECTION_SLUG: &str = "COLLECTION_SLUG";
pub const ENV_CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_USER_ID: &str = "TELEGRAM_USER_ID";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_OPENSEA_API_KEY: &str = "OPENSEA_API_KEY";
pub const ENV_MIN_SCORE_THRESHOLD: &str = "MIN_SCORE_THRESHOLD";
pub const ENV_TOTAL_SUPPLY: &str = "TOTAL_SUPPLY";

/// Default config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Watched collection and scoring inputs.
    #[serde(default)]
    pub collection: CollectionConfig,

    /// OpenSea API connection settings.
    #[serde(default)]
    pub opensea: OpenSeaConfig,

    /// Telegram alert destination.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Loop timing and trait cache location.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an environment
    /// override is invalid, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_toml`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration for a run.
    ///
    /// An explicit path must exist. Without one, `config.toml` is used when
    /// present and defaults plus environment otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or parsing or
    /// validation fails.
    #[allow(clippy::result_large_err)]
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Path::new(DEFAULT_CONFIG_PATH);
        if default.exists() {
            Self::load(default)
        } else {
            Self::parse_toml("")
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Blank values count as unset. A `MIN_SCORE_THRESHOLD` that is not a
    /// finite non-negative number is ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-integer Telegram user
    /// id or total supply.
    #[allow(clippy::result_large_err)]
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(slug) = get(ENV_COLLECTION_SLUG) {
            self.collection.slug = Some(slug);
        }
        if let Some(contract) = get(ENV_CONTRACT_ADDRESS) {
            self.collection.contract_address = Some(contract);
        }
        if let Some(token) = get(ENV_TELEGRAM_BOT_TOKEN) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(raw) = get(ENV_TELEGRAM_USER_ID).or_else(|| get(ENV_TELEGRAM_CHAT_ID)) {
            let chat_id = raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_TELEGRAM_USER_ID,
                reason: format!("expected an integer chat id, got {raw:?}"),
            })?;
            self.telegram.chat_id = Some(chat_id);
        }
        if let Some(key) = get(ENV_OPENSEA_API_KEY) {
            self.opensea.api_key = Some(key);
        }
        if let Some(raw) = get(ENV_MIN_SCORE_THRESHOLD) {
            match raw.parse::<f64>().ok().map(ScoreThreshold::new) {
                Some(Ok(threshold)) => {
                    self.collection.min_score_threshold = Some(threshold.value());
                }
                Some(Err(e)) => warn!(
                    variable = ENV_MIN_SCORE_THRESHOLD,
                    value = %raw,
                    error = %e,
                    "Ignoring unusable threshold override"
                ),
                None => warn!(
                    variable = ENV_MIN_SCORE_THRESHOLD,
                    value = %raw,
                    "Ignoring unparseable threshold override"
                ),
            }
        }
        if let Some(raw) = get(ENV_TOTAL_SUPPLY) {
            self.collection.total_supply = raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_TOTAL_SUPPLY,
                reason: format!("expected an integer, got {raw:?}"),
            })?;
        }
        Ok(())
    }

    /// Validate connection and timing values.
    ///
    /// Required run inputs are checked separately by
    /// [`Config::monitor_settings`] so that every missing item is reported
    /// together.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.opensea.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.opensea.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.opensea.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.opensea.timeout_ms == 0 || self.opensea.metadata_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "request timeouts must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.error_backoff_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "error_backoff_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.max_seen_listings == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_seen_listings",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Resolve the settings a monitoring run needs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFields`] naming every missing required
    /// input, or a domain error for a non-positive total supply or an invalid
    /// threshold.
    #[allow(clippy::result_large_err)]
    pub fn monitor_settings(&self) -> Result<MonitorSettings> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        let mut missing = Vec::new();
        if !present(&self.collection.slug) {
            missing.push(ENV_COLLECTION_SLUG);
        }
        if !present(&self.collection.contract_address) {
            missing.push(ENV_CONTRACT_ADDRESS);
        }
        if !present(&self.telegram.bot_token) {
            missing.push(ENV_TELEGRAM_BOT_TOKEN);
        }
        if self.telegram.chat_id.is_none() {
            missing.push(ENV_TELEGRAM_USER_ID);
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingFields { fields: missing }.into());
        }

        let collection_slug = self.collection.slug.clone().unwrap_or_default();
        let contract_address = self.collection.contract_address.clone().unwrap_or_default();
        let total_supply = TotalSupply::new(self.collection.total_supply)?;
        let threshold = resolve_threshold(
            Some(&collection_slug),
            self.collection.min_score_threshold,
        )?;

        Ok(MonitorSettings {
            collection_slug,
            contract_address,
            threshold,
            total_supply,
            page_size: self.opensea.page_size,
            poll_interval: Duration::from_millis(self.monitor.poll_interval_ms),
            error_backoff: Duration::from_millis(self.monitor.error_backoff_ms),
            max_seen_listings: self.monitor.max_seen_listings.and_then(NonZeroUsize::new),
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

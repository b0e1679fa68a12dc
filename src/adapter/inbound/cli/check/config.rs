use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};

/// Validate configuration and print the resolved run settings.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path)?;

    output::section("Configuration Check");
    match config_path {
        Some(path) => output::field("Config", path.display()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            output::field("Config", DEFAULT_CONFIG_PATH);
        }
        None => output::field("Config", "defaults + environment"),
    }
    output::success("Configuration file is valid");

    output::section("OpenSea");
    output::field("API", &config.opensea.api_url);
    output::field("Page size", config.opensea.page_size);
    if config.opensea.api_key.is_some() {
        output::success("API key detected");
    } else {
        output::warning("No API key configured (set OPENSEA_API_KEY)");
    }

    let settings = match config.monitor_settings() {
        Ok(settings) => settings,
        Err(Error::Config(ConfigError::MissingFields { fields })) => {
            output::missing_inputs(&fields);
            return Err(ConfigError::MissingFields { fields }.into());
        }
        Err(e) => return Err(e),
    };

    output::section("Run settings");
    output::run_settings(&settings);
    output::field("Trait cache", config.monitor.trait_cache_path.display());

    output::success("Configuration check complete");
    Ok(())
}

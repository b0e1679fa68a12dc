use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_trait_store;
use crate::infrastructure::config::settings::Config;

/// Summarize the trait frequency cache the monitor would load.
pub fn execute_cache(config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path)?;
    let cache = build_trait_store(&config).load();

    output::section("Trait Cache Check");
    output::trait_cache(&config.monitor.trait_cache_path, &cache);
    Ok(())
}

//! Handler for the `run` command.

use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::orchestration::{self, MonitorSettings};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    config.init_logging();

    if let Ok(settings) = config.monitor_settings() {
        if !output::is_quiet() && !args.json_logs {
            print_startup_config(&settings);
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "rarescout starting");
    let summary = orchestration::run(&config).await?;
    output::run_summary(&summary);
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn build_config(args: &RunArgs) -> Result<Config> {
    let mut config = Config::discover(args.config.as_deref())?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".to_string();
    }
    if let Some(threshold) = args.threshold {
        config.collection.min_score_threshold = Some(threshold);
    }
    Ok(config)
}

fn print_startup_config(settings: &MonitorSettings) {
    output::banner(env!("CARGO_PKG_VERSION"));
    output::run_settings(settings);
}

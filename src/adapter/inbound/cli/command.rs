//! Command-line interface definitions.
//!
//! Defines the CLI structure for rarescout using `clap`: `run` starts the
//! monitor in the foreground, `check` validates configuration, the trait
//! cache, and alert delivery before a long unattended run.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NFT listing rarity monitor
#[derive(Parser, Debug)]
#[command(name = "rarescout")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the rarescout CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch new listings and alert on rare ones (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `rarescout check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and show the resolved run settings.
    Config(ConfigPathArg),
    /// Summarize the trait frequency cache.
    Cache(ConfigPathArg),
    /// Send a test message through Telegram.
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file [default: config.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file [default: config.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Override the minimum rarity score that triggers an alert
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_overrides() {
        let cli = Cli::try_parse_from([
            "rarescout",
            "run",
            "-c",
            "custom.toml",
            "--log-level",
            "debug",
            "--json-logs",
            "--threshold",
            "42.5",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
        assert_eq!(args.threshold, Some(42.5));
    }

    #[test]
    fn parses_check_subcommands() {
        let cli = Cli::try_parse_from(["rarescout", "check", "cache"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Cache(ConfigPathArg { config: None }))
        ));

        let cli = Cli::try_parse_from(["rarescout", "--json", "check", "config"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        assert!(Cli::try_parse_from(["rarescout", "run", "--threshold", "high"]).is_err());
    }
}

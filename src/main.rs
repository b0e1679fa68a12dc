use clap::Parser;

use rarescout::adapter::inbound::cli::command::{CheckCommand, Cli, ColorChoice, Commands};
use rarescout::adapter::inbound::cli::output::{self, OutputConfig};
use rarescout::adapter::inbound::cli::{check, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Check(CheckCommand::Config(arg)) => {
            check::config::execute_config(arg.config.as_deref())
        }
        Commands::Check(CheckCommand::Cache(arg)) => {
            check::cache::execute_cache(arg.config.as_deref())
        }
        Commands::Check(CheckCommand::Telegram(arg)) => {
            check::telegram::execute_telegram(arg.config.as_deref()).await
        }
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

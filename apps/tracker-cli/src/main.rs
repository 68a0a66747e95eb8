//! Game Tracker command-line entry point.

mod commands;
mod config;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gametracker_games::GameCollection;
use gametracker_rest_store::RestStore;

use commands::Cli;
use config::TrackerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let tracker_config = match TrackerConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            TrackerConfig::default()
        }
    }
    .with_overrides(std::env::var(config::URL_ENV).ok(), cli.url);

    tracing::debug!(base_url = %tracker_config.base_url, "configuration loaded");

    let store = match tracker_config.timeout() {
        Some(timeout) => RestStore::with_timeout(&tracker_config.base_url, timeout)?,
        None => RestStore::new(&tracker_config.base_url)?,
    };
    let collection = GameCollection::new(Arc::new(store));

    commands::run(cli.command, &collection, &tracker_config).await
}

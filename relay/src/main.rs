//! yoed Relay Server Entry Point

use clap::Parser;
use tracing::info;
use yoed_common::config::RelayConfig;
use yoed_common::error::RelayResult;
use yoed_relay::cli::Cli;
use yoed_relay::{logging, server, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> RelayResult<()> {
    info!("yoed relay v{}", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::load(&cli.config)?;
    info!(config = %cli.config.display(), listen = %config.listen, "Config loaded");

    let state = AppState::new(reqwest::Client::new());

    server::run(state, &config.bind_addr()).await
}

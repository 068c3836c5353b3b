//! swapctl - CLI for SwapSafe product identity checks
//!
//! Validates identifiers offline and checks them against live listings.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod error;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet unless RUST_LOG asks otherwise; stdout is reserved for output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.run().await {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

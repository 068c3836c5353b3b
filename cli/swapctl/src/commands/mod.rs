//! CLI commands.

mod check;
mod kinds;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::output::OutputFormat;

/// swapctl - Validate product identifiers and check them against listings.
#[derive(Debug, Parser)]
#[command(name = "swapctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Catalog service base URL.
    #[arg(
        long,
        global = true,
        env = "SWAPSAFE_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate an identifier locally (no network).
    Validate(validate::ValidateCommand),

    /// Check whether an identifier is already held by a live listing.
    Check(check::CheckCommand),

    /// List supported identifier kinds.
    Kinds(kinds::KindsCommand),
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let ctx = CommandContext {
            api_url: self.api_url,
            format: OutputFormat::parse(&self.format),
        };

        match self.command {
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx).await,
            Commands::Kinds(cmd) => cmd.run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub api_url: String,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.api_url)
    }
}

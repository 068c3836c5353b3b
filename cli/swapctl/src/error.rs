//! Error handling and display for the CLI.

use colored::Colorize;
use swapsafe_identifiers::IdentifierError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The identifier was checked and rejected.
    #[error("{0}")]
    InvalidIdentifier(IdentifierError),

    /// The service rejected the identifier with a message of its own.
    #[error("{0}")]
    Rejected(String),

    #[error("API error: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an API error from response details.
    pub fn api(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: Option<String>,
    ) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            request_id,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidIdentifier(IdentifierError::Required) => {
                eprintln!("\n{}", "Hint: Pass the identifier as the first argument.".yellow());
            }
            CliError::InvalidIdentifier(e) if e.is_checksum_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: The check digit does not match. Re-read the identifier from the device."
                        .yellow()
                );
            }
            CliError::Api {
                status,
                code,
                request_id,
                ..
            } => {
                eprintln!("\nStatus: {} ({})", status, code);
                if let Some(request_id) = request_id {
                    eprintln!("Request ID: {}", request_id);
                }
            }
            CliError::Network(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check that the catalog service is running and --api-url is correct."
                        .yellow()
                );
            }
            _ => {}
        }
    }
}

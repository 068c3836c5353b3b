//! Offline identifier validation.

use anyhow::Result;
use clap::Args;
use swapsafe_identifiers::{validate, IdentifierKind, ValidationResult};

use crate::error::CliError;
use crate::output::{print_field, print_json, print_success, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifier as printed on the product.
    value: String,

    /// Identifier kind (imei, vin, isbn, mac, serial, sku).
    #[arg(long, short, default_value = "serial")]
    kind: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = IdentifierKind::from_tag(&self.kind);
        let result = validate(&self.value, kind);

        if ctx.format == OutputFormat::Json {
            print_json(&result);
        }

        match result {
            ValidationResult::Valid(id) => {
                if ctx.format == OutputFormat::Table {
                    print_success(&format!("Valid {}", kind.info().label));
                    print_field("Cleaned", id.cleaned());
                    print_field("Masked", id.masked());
                    if let Some(formatted) = id.formatted() {
                        print_field("Formatted", formatted);
                    }
                }
                Ok(())
            }
            ValidationResult::Invalid(err) => Err(CliError::InvalidIdentifier(err).into()),
        }
    }
}

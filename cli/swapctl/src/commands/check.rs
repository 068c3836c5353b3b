//! Remote duplicate check.

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::{print_field, print_json, print_success, print_warning, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identifier as printed on the product.
    value: String,

    /// Identifier kind (imei, vin, isbn, mac, serial, sku).
    #[arg(long, short, default_value = "serial")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct CheckDuplicateRequest<'a> {
    value: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckDuplicateResponse {
    valid: bool,
    duplicate: bool,
    #[serde(default)]
    existing: Option<ExistingListing>,
    #[serde(default)]
    masked: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExistingListing {
    listing_id: String,
    title: String,
    status: String,
}

impl CheckCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let client = ctx.client()?;
        let request = CheckDuplicateRequest {
            value: &self.value,
            kind: &self.kind,
        };

        let response: CheckDuplicateResponse = client
            .post("/v1/products/check-duplicate", &request)
            .await?;

        if ctx.format == OutputFormat::Json {
            print_json(&response);
        }

        if !response.valid {
            let message = response
                .error
                .unwrap_or_else(|| "Identifier is invalid".to_string());
            return Err(CliError::Rejected(message).into());
        }

        if ctx.format == OutputFormat::Table {
            let masked = response.masked.as_deref().unwrap_or("");
            match &response.existing {
                Some(existing) => {
                    print_warning(&format!("{masked} is already listed"));
                    print_field("Listing", &existing.listing_id);
                    print_field("Title", &existing.title);
                    print_field("Status", &existing.status);
                }
                None => print_success(&format!("{masked} is not listed yet")),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_type_field() {
        let request = CheckDuplicateRequest {
            value: "490154203237518",
            kind: "imei",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "imei");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_parse_invalid_response() {
        let response: CheckDuplicateResponse = serde_json::from_str(
            r#"{"valid":false,"duplicate":false,"error":"Invalid VIN check digit"}"#,
        )
        .unwrap();
        assert!(!response.valid);
        assert!(response.existing.is_none());
        assert_eq!(response.error.as_deref(), Some("Invalid VIN check digit"));
    }

    #[test]
    fn test_parse_duplicate_response() {
        let response: CheckDuplicateResponse = serde_json::from_str(
            r#"{
                "valid": true,
                "duplicate": true,
                "existing": {
                    "listing_id": "lst_01HV4Z2WQXKJNM8GPQY6VBKC3D",
                    "title": "iPhone",
                    "status": "active"
                },
                "masked": "***03237518"
            }"#,
        )
        .unwrap();
        assert!(response.duplicate);
        assert_eq!(response.existing.unwrap().status, "active");
    }
}

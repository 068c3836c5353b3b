//! Product identity endpoints.
//!
//! Validation outcomes are always 200 responses; only malformed requests
//! (unparseable body, missing `value`) are problem responses.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use swapsafe_identifiers::{validate, IdentifierKind, KindInfo, ValidationResult};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;
use crate::store::ListingSummary;

/// Create product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/validate-id", post(validate_id))
        .route("/check-duplicate", post(check_duplicate))
        .route("/id-kinds", get(list_id_kinds))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Identifier submitted for validation or duplicate checking.
#[derive(Debug, Deserialize, Serialize)]
pub struct IdentifierRequest {
    /// Raw identifier as the seller typed it.
    #[serde(default)]
    pub value: Option<String>,

    /// Declared kind (`imei`, `vin`, `isbn`, `mac`, `serial`, `sku`, ...).
    /// Defaults to `serial`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckDuplicateResponse {
    Invalid {
        valid: bool,
        duplicate: bool,
        error: String,
    },
    Checked {
        valid: bool,
        duplicate: bool,
        existing: Option<ListingSummary>,
        masked: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ListIdKindsResponse {
    pub items: Vec<KindInfo>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Parse the body and resolve `(value, kind)`, rejecting requests with no
/// value at all.
fn parse_request(
    body: Result<Json<IdentifierRequest>, JsonRejection>,
    request_id: &str,
) -> Result<(String, IdentifierKind), ApiError> {
    let Json(req) = body.map_err(|rejection| {
        ApiError::bad_request("invalid_body", rejection.body_text())
            .with_request_id(request_id.to_string())
    })?;

    let value = req.value.filter(|v| !v.is_empty()).ok_or_else(|| {
        ApiError::bad_request("value_required", "ID value is required")
            .with_request_id(request_id.to_string())
    })?;

    Ok((value, IdentifierKind::from(req.kind.as_deref())))
}

fn log_outcome(request_id: &str, kind: IdentifierKind, result: &ValidationResult) {
    tracing::debug!(
        request_id = %request_id,
        kind = %kind,
        valid = result.is_valid(),
        error_code = result.error().map(|e| e.code()),
        masked = result.masked(),
        "Identifier validated"
    );
}

/// Validate a unique identifier.
///
/// POST /v1/products/validate-id
async fn validate_id(
    ctx: RequestContext,
    body: Result<Json<IdentifierRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let (value, kind) = parse_request(body, &ctx.request_id)?;

    let result = validate(&value, kind);
    log_outcome(&ctx.request_id, kind, &result);

    Ok(Json(result))
}

/// Check whether a unique identifier is already held by a live listing.
///
/// POST /v1/products/check-duplicate
async fn check_duplicate(
    State(state): State<AppState>,
    ctx: RequestContext,
    body: Result<Json<IdentifierRequest>, JsonRejection>,
) -> Result<Json<CheckDuplicateResponse>, ApiError> {
    let request_id = ctx.request_id;
    let (value, kind) = parse_request(body, &request_id)?;

    let result = validate(&value, kind);
    log_outcome(&request_id, kind, &result);

    let id = match result {
        ValidationResult::Valid(id) => id,
        ValidationResult::Invalid(err) => {
            return Ok(Json(CheckDuplicateResponse::Invalid {
                valid: false,
                duplicate: false,
                error: err.to_string(),
            }));
        }
    };

    let existing = state
        .listings()
        .find_blocking(id.cleaned())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, request_id = %request_id, "Failed to look up listings");
            ApiError::internal("internal_error", "Failed to check for duplicate listings")
                .with_request_id(request_id.clone())
        })?;

    if let Some(listing) = &existing {
        tracing::info!(
            request_id = %request_id,
            kind = %kind,
            masked = id.masked(),
            listing_id = %listing.listing_id,
            "Duplicate identifier found"
        );
    }

    Ok(Json(CheckDuplicateResponse::Checked {
        valid: true,
        duplicate: existing.is_some(),
        existing,
        masked: id.masked().to_string(),
    }))
}

/// List supported identifier kinds with entry guidance.
///
/// GET /v1/products/id-kinds
async fn list_id_kinds() -> Json<ListIdKindsResponse> {
    Json(ListIdKindsResponse {
        items: IdentifierKind::ALL.iter().map(IdentifierKind::info).collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use rstest::rstest;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::create_router;
    use crate::state::AppState;
    use crate::store::InMemoryListingStore;

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let app = create_router(AppState::new(Arc::new(InMemoryListingStore::new())));
        let request = Request::post(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validate_id_defaults_to_serial() {
        let (status, body) =
            post_json("/v1/products/validate-id", json!({ "value": "abcde12345" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "valid": true, "cleaned": "ABCDE12345", "masked": "***E12345" })
        );
    }

    #[tokio::test]
    async fn test_invalid_identifier_is_not_a_request_error() {
        let (status, body) = post_json(
            "/v1/products/validate-id",
            json!({ "value": "490154203237519", "type": "imei" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "valid": false, "error": "Invalid IMEI checksum" }));
    }

    #[tokio::test]
    async fn test_whitespace_value_reaches_validator() {
        let (status, body) =
            post_json("/v1/products/validate-id", json!({ "value": "   " })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "ID is required");
    }

    #[rstest]
    #[case::missing(json!({ "type": "imei" }))]
    #[case::empty(json!({ "value": "" }))]
    #[case::null(json!({ "value": null, "type": "vin" }))]
    #[tokio::test]
    async fn test_missing_value_is_bad_request(#[case] payload: Value) {
        let (status, body) = post_json("/v1/products/validate-id", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "value_required");
        assert_eq!(body["detail"], "ID value is required");
        assert!(body["request_id"].as_str().unwrap().starts_with("req_"));
    }

    #[tokio::test]
    async fn test_non_string_value_is_bad_request() {
        let (status, body) =
            post_json("/v1/products/check-duplicate", json!({ "value": 42 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_body");
    }

    #[tokio::test]
    async fn test_check_duplicate_invalid_shape() {
        let (status, body) = post_json(
            "/v1/products/check-duplicate",
            json!({ "value": "AA:BB", "type": "mac" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "valid": false,
                "duplicate": false,
                "error": "MAC address must be 12 hexadecimal characters"
            })
        );
    }

    #[tokio::test]
    async fn test_check_duplicate_not_found_has_null_existing() {
        let (status, body) = post_json(
            "/v1/products/check-duplicate",
            json!({ "value": "9780306406157", "type": "isbn" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "valid": true, "duplicate": false, "existing": null, "masked": "***406157" })
        );
    }

    #[tokio::test]
    async fn test_id_kinds_lists_every_kind() {
        let app = create_router(AppState::new(Arc::new(InMemoryListingStore::new())));
        let request = Request::get("/v1/products/id-kinds")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let kinds: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["imei", "vin", "isbn", "mac", "serial"]);
    }
}

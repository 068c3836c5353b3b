//! HTTP client for the catalog service.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::CliError;

/// API client for communicating with the catalog service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CliError> {
        tracing::debug!(url = %self.url(path), "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CliError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to parse response: {}", e)))
        } else {
            self.handle_error(response).await
        }
    }

    /// Handle a problem response.
    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, CliError> {
        let status = response.status().as_u16();

        let problem: ProblemResponse = response.json().await.unwrap_or_else(|_| ProblemResponse {
            code: "unknown".to_string(),
            detail: "Unknown error".to_string(),
            request_id: None,
        });

        Err(CliError::api(
            status,
            problem.code,
            problem.detail,
            problem.request_id,
        ))
    }
}

/// Problem document returned by the catalog service.
#[derive(Debug, Deserialize)]
struct ProblemResponse {
    code: String,
    detail: String,
    #[serde(default)]
    request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(
            client.url("/v1/products/check-duplicate"),
            "http://localhost:8080/v1/products/check-duplicate"
        );
    }
}

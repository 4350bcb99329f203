use crate::config::ApiConfig;
use crate::domain::ports::TransactionService;
use crate::error::{AnvilError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Header carrying the service API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the transaction-building service.
///
/// Each call performs exactly one request; there are no retries. Non-2xx
/// responses are returned as-is because the service reports failures as
/// JSON bodies.
#[derive(Clone)]
pub struct AnvilClient {
    config: ApiConfig,
    http: Client,
}

impl AnvilClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl TransactionService for AnvilClient {
    async fn build(&self, body: Vec<u8>) -> Result<Vec<u8>> {
        let url = self.config.build_url();
        tracing::info!(url = %url, "submitting transaction build request");
        tracing::debug!(body = %String::from_utf8_lossy(&body), "request body");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.config.api_key())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "transaction build returned non-success status");
        }

        // The request was delivered; a broken body stream is a decoding failure.
        let bytes = response.bytes().await.map_err(AnvilError::decode)?;
        tracing::debug!(status = %status, len = bytes.len(), "received response");

        Ok(bytes.to_vec())
    }

    async fn health(&self) -> Result<String> {
        let url = self.config.health_url();
        tracing::info!(url = %url, "querying service health");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "health check returned non-success status");
        }

        response.text().await.map_err(AnvilError::decode)
    }
}

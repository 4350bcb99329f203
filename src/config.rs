//! Compiled-in defaults and the API connection settings derived from them.

use crate::error::{AnvilError, Result};
use std::time::Duration;
use url::Url;

/// Base URL of the preprod transaction service.
pub const DEFAULT_API_URL: &str = "https://preprod.api.ada-anvil.app/v2/services";
/// Public preprod key used by the service documentation.
pub const DEFAULT_API_KEY: &str = "testnet_EyrkvCWDZqjkfLSe1pxaF0hXxUcByHEhHuXIBjt9";

pub const DEFAULT_CHANGE_ADDRESS: &str = "addr_test1qrydyk6uw6cehk5u3zspyz3dhnwzmhfls2fp42vv5dv9g2z3885pg4kpkn30ptezc855lu3w5ey93zcr5lrezjmwkftqg8xvge";
pub const DEFAULT_RECEIVER_ADDRESS: &str = "addr_test1qr0tkwvlln0v5fljdxceudmlpt5y6szc84vpj4skm836tgn4hsqaesgg97l8ppy5rsn0alj8pth6lqe20fdyydsdgw6sr74cyt";
pub const DEFAULT_LOVELACE_AMOUNT: u64 = 10_000_000;

/// Connection settings for the transaction service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Validates `base_url` and builds the config.
    ///
    /// The URL must use `http` or `https`. A trailing slash is dropped so
    /// endpoint paths can be appended uniformly.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| AnvilError::ConfigError(format!("invalid API URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AnvilError::ConfigError(format!(
                "unsupported URL scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn build_url(&self) -> String {
        format!("{}/transactions/build", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: None,
        }
    }
}

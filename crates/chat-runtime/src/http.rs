//! HTTP Remote Exchange
//!
//! Implementation of `RemoteExchange` as a JSON POST to a configured endpoint.

use async_trait::async_trait;
use chat_core::{
    error::{ExchangeError, Result},
    exchange::{ExchangeReply, ExchangeRequest, RemoteExchange},
};

/// Environment variable holding the endpoint URL
pub const ENDPOINT_ENV: &str = "CHAT_ENDPOINT_URL";

/// Exchange endpoint configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Endpoint URL; `None` or blank fails each exchange with a config error
    pub endpoint: Option<String>,
}

impl ExchangeConfig {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.filter(|url| !url.trim().is_empty()),
        }
    }

    /// Read the endpoint from the process environment
    pub fn from_env() -> Self {
        Self::new(std::env::var(ENDPOINT_ENV).ok())
    }

    /// Endpoint URL, or the error every exchange reports without one
    pub fn endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .ok_or_else(|| ExchangeError::Config(format!("{ENDPOINT_ENV} is not set")))
    }
}

/// HTTP remote exchange
pub struct HttpExchange {
    client: reqwest::Client,
    config: ExchangeConfig,
}

impl HttpExchange {
    /// Create an exchange posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_config(ExchangeConfig::new(Some(endpoint.into())))
    }

    /// Create from configuration
    pub fn from_config(config: ExchangeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(ExchangeConfig::from_env())
    }

    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Parse a response body into a reply
    fn decode(body: &str) -> Result<ExchangeReply> {
        serde_json::from_str(body).map_err(|e| ExchangeError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RemoteExchange for HttpExchange {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply> {
        let endpoint = self.config.endpoint()?;

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        // Status is not checked; a body with `output_text` is a reply either way
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "exchange endpoint returned non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        Self::decode(&body)
    }
}

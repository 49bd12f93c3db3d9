//! Market-data proxy client
//!
//! Read-only passthrough to a third-party pre-open market snapshot. The
//! upstream JSON is returned unmodified; upstream failures carry the
//! upstream status code so the server can proxy it.

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::common::errors::{GatewayError, Result};

// The provider rejects requests without a browser-like user agent.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Client for the upstream pre-open snapshot endpoint
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    /// HTTP client
    client: Client,
    /// Upstream snapshot URL
    pre_open_url: String,
}

impl MarketDataClient {
    /// Create a new client with the default timeout
    pub fn new(pre_open_url: &str) -> Result<Self> {
        Self::with_timeout(pre_open_url, Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(pre_open_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            pre_open_url: pre_open_url.to_string(),
        })
    }

    /// Fetch the pre-open market snapshot, passing the upstream JSON through
    #[instrument(skip(self))]
    pub async fn pre_open_snapshot(&self) -> Result<serde_json::Value> {
        debug!("Fetching pre-open snapshot from: {}", self.pre_open_url);

        let response = self
            .client
            .get(&self.pre_open_url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let snapshot: serde_json::Value = response.json().await?;
        Ok(snapshot)
    }
}

//! Dispatcher - delivers composed alerts to the messaging-bot webhook
//!
//! Exactly one POST per confirmed message, no retries. A failed dispatch is
//! reported back so the trader can correct and resend manually.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::common::errors::{GatewayError, Result};

/// Webhook client for the messaging bot
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// HTTP client
    client: Client,
    /// Webhook endpoint the message is POSTed to
    webhook_url: String,
}

/// The one-field payload the webhook accepts
#[derive(Serialize)]
struct WebhookPayload<'a> {
    message: &'a str,
}

impl Dispatcher {
    /// Create a new dispatcher with the default timeout
    pub fn new(webhook_url: &str) -> Result<Self> {
        Self::with_timeout(webhook_url, Duration::from_secs(30))
    }

    /// Create a new dispatcher with a custom timeout
    pub fn with_timeout(webhook_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(webhook_url).map_err(|e| {
            GatewayError::Configuration(format!("invalid webhook URL {webhook_url}: {e}"))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.to_string(),
        })
    }

    /// Send a composed alert to the webhook
    ///
    /// Single attempt; any non-success status or transport failure surfaces
    /// as a [`GatewayError::Dispatch`].
    #[instrument(skip(self, text))]
    pub async fn dispatch(&self, text: &str) -> Result<()> {
        debug!("Dispatching alert to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { message: text })
            .send()
            .await
            .map_err(|e| GatewayError::Dispatch {
                status: 0,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Dispatch {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

//! HTTP client for the configured webhook endpoint.

use std::time::Duration;

use thiserror::Error;

use crate::payload::WebhookPayload;

/// Errors from a webhook delivery attempt.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed")]
    Http(#[from] reqwest::Error),

    #[error("webhook endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Thin client over the outbound webhook endpoint.
///
/// Sends each payload as a single JSON POST. There is deliberately no
/// retry here; the delivery policy lives in [`crate::dispatch`].
#[derive(Debug, Clone)]
pub struct WebhookClient {
    endpoint: String,
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create with a request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one payload as `application/json`.
    ///
    /// # Errors
    ///
    /// [`WebhookError::Http`] on transport failure,
    /// [`WebhookError::Status`] on any non-2xx response.
    pub async fn send(
        &self,
        payload: &WebhookPayload,
    ) -> Result<(), WebhookError> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }
        Ok(())
    }
}

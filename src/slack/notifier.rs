//! Webhook delivery.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::payload::WebhookPayload;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook endpoint answered HTTP {status}")]
    Status { status: u16 },
    #[error("webhook delivery failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Notification transport consumed by the pipeline, as a trait so tests
/// can substitute in-memory fakes.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver one payload. Fire-and-forget: no retry on failure.
    async fn post(&self, payload: &WebhookPayload) -> Result<(), DeliveryError>;
}

/// Production [`Notify`] implementation posting to a Slack incoming
/// webhook. The destination URL comes from configuration at construction
/// time; it is never fetched from a secrets API at call time.
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            webhook_url,
        })
    }
}

#[async_trait]
impl Notify for SlackNotifier {
    async fn post(&self, payload: &WebhookPayload) -> Result<(), DeliveryError> {
        debug!("delivering webhook notification");
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

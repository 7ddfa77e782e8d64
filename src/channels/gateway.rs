//! HTTP SMS gateway sender.
//!
//! Posts each outbound message to a configured gateway endpoint with a
//! bearer token. Every attempt carries a fresh delivery id so gateway-side
//! logs can be correlated with ours.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::channels::SmsSender;
use crate::error::ChannelError;

/// Sender backed by a JSON-over-HTTP SMS gateway.
pub struct HttpSmsSender {
    endpoint: String,
    token: SecretString,
    client: reqwest::Client,
}

impl HttpSmsSender {
    pub fn new(endpoint: String, token: SecretString) -> Self {
        Self {
            endpoint,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SmsSender for HttpSmsSender {
    fn name(&self) -> &str {
        "http-gateway"
    }

    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError> {
        let delivery_id = Uuid::new_v4();
        let payload = serde_json::json!({
            "to": to,
            "body": body,
            "delivery_id": delivery_id,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.token.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: self.name().to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ChannelError::Rejected {
                name: self.name().to_string(),
                reason: format!("{status}: {detail}"),
            });
        }

        tracing::debug!(to, %delivery_id, "outbound SMS delivered");
        Ok(())
    }
}

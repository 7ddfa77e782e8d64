//! Message transport — the inbound webhook and the outbound SMS channel.

pub mod gateway;
pub mod webhook;

use async_trait::async_trait;
use tracing::info;

use crate::error::ChannelError;

/// Outbound SMS delivery — pure I/O, no dialog logic.
///
/// Delivery is decoupled from dialog-state commitment: the session is
/// committed first and the send is attempted after, so a send failure
/// never rolls back or corrupts an advanced session.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Deliver a reply to a phone number.
    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError>;
}

/// Sender that only logs — the default when no gateway is configured.
#[derive(Debug, Default)]
pub struct LogSender;

#[async_trait]
impl SmsSender for LogSender {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError> {
        info!(to, chars = body.chars().count(), "outbound SMS (log only)");
        Ok(())
    }
}

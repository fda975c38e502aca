use crate::error::NotifyError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod memory;
pub mod webhook;

/// Abstraction over the publish-subscribe notification channel.
///
/// A published message fans out to whatever subscribers the backend knows
/// about; delivery past the publish acknowledgement is not this system's
/// concern.
#[async_trait]
pub trait NotificationSink: Send + Sync + Debug {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), NotifyError>;
}

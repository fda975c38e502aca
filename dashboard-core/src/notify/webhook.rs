use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::NotifyError;

use super::NotificationSink;

/// Sink that POSTs each message to the topic, treated as an HTTP endpoint.
#[derive(Debug, Clone, Default)]
pub struct WebhookSink {
    http: Client,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    topic: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl WebhookSink {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), NotifyError> {
        let res = self
            .http
            .post(topic)
            .json(&WebhookPayload { topic, subject, message })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status, body: truncate_body(&body) });
        }

        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

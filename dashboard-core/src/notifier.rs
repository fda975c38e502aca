use std::sync::Arc;

use log::{error, info};
use serde::Serialize;

use crate::{
    error::ReportError,
    model::{AggregateReport, StorageEvent},
    notify::NotificationSink,
    render,
    store::ObjectStore,
};

const SUBJECT: &str = "Weather Dashboard Report";
const CONFIRMATION: &str = "Weather report sent successfully.";

/// Turns a new-report storage event into a published text report.
///
/// Safe to re-invoke for the same event; a retry publishes the report again,
/// which is acceptable and not prevented.
#[derive(Debug)]
pub struct Notifier {
    store: Arc<dyn ObjectStore>,
    sink: Arc<dyn NotificationSink>,
    topic: String,
}

/// Invocation result in the event source's response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Notifier {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        sink: Arc<dyn NotificationSink>,
        topic: String,
    ) -> Self {
        Self { store, sink, topic }
    }

    /// Read the event's object, render it, publish it. Returns the
    /// confirmation message on success.
    pub async fn handle_event(&self, event: &StorageEvent) -> Result<String, ReportError> {
        let (bucket, key) = event.bucket_and_key().ok_or(ReportError::MalformedEvent)?;

        let body = self.store.get_object(bucket, key).await.map_err(ReportError::Read)?;
        let report: AggregateReport = serde_json::from_slice(&body)?;

        let message = render::render(&report);
        self.sink.publish(&self.topic, SUBJECT, &message).await.map_err(ReportError::Publish)?;

        info!("published report for {bucket}/{key} ({} cities)", report.len());
        Ok(CONFIRMATION.to_string())
    }

    /// Invocation wrapper: success → 200 with a confirmation body, any
    /// failure → 500 with the error description. Failure kinds are not
    /// distinguished to the caller.
    pub async fn respond(&self, event: &StorageEvent) -> HandlerResponse {
        match self.handle_event(event).await {
            Ok(body) => HandlerResponse { status_code: 200, body },
            Err(err) => {
                error!("failed to process report event: {err}");
                HandlerResponse {
                    status_code: 500,
                    body: format!("Error processing weather data: {err}"),
                }
            }
        }
    }
}

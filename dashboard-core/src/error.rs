use reqwest::StatusCode;

/// Failure fetching or decoding one city's upstream observation.
///
/// Contained by the collector: a failed city is logged and skipped, the run
/// continues with the remaining cities.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected weather payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("sunrise/sunset timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Failure talking to the object store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("bucket {0} does not exist")]
    BucketNotFound(String),

    #[error("bucket {0} already exists")]
    BucketAlreadyExists(String),

    #[error("object {key} not found in bucket {bucket}")]
    ObjectNotFound { bucket: String, key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure delivering a message through the notification sink.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to reach notification endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notification endpoint returned status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Failure persisting an aggregate report.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to store: {0}")]
    Store(#[from] StoreError),
}

/// Failure turning a storage event into a published report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("event does not name a bucket and object key")]
    MalformedEvent,

    #[error("failed to read stored report: {0}")]
    Read(#[source] StoreError),

    #[error("stored report is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to publish report: {0}")]
    Publish(#[source] NotifyError),
}

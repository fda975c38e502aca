use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use log::{info, warn};

use crate::{
    error::{PersistError, StoreError},
    model::{AggregateReport, StoredObject},
    provider::WeatherProvider,
    store::ObjectStore,
};

/// Runs one collection cycle: fetch every configured city in order,
/// aggregate the successes, persist the result as a timestamped object.
#[derive(Debug)]
pub struct Collector {
    provider: Box<dyn WeatherProvider>,
    store: Arc<dyn ObjectStore>,
}

/// What [`Collector::persist`] did with a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The report was empty; nothing was written.
    Skipped,
    /// The report was written to the store.
    Stored(StoredObject),
}

impl Collector {
    pub fn new(provider: Box<dyn WeatherProvider>, store: Arc<dyn ObjectStore>) -> Self {
        Self { provider, store }
    }

    /// One full cycle: ensure the bucket, collect every city, persist.
    pub async fn run(
        &self,
        cities: &[String],
        bucket: &str,
    ) -> Result<(AggregateReport, PersistOutcome), PersistError> {
        self.ensure_bucket(bucket).await;
        let report = self.collect(cities).await;
        let outcome = self.persist(&report, bucket).await?;
        Ok((report, outcome))
    }

    /// Fetch every city sequentially, in list order. A city whose fetch or
    /// decode fails is logged and left out of the report; it never aborts
    /// the run. No retries.
    pub async fn collect(&self, cities: &[String]) -> AggregateReport {
        let mut report = AggregateReport::new();

        for city in cities {
            info!("fetching weather for {city}");
            match self.provider.observe(city).await {
                Ok(observation) => {
                    info!(
                        "{city}: {}, {}, humidity {}",
                        observation.temperature.as_deref().unwrap_or("N/A"),
                        observation.conditions.as_deref().unwrap_or("N/A"),
                        observation.humidity.as_deref().unwrap_or("N/A"),
                    );
                    report.insert(city.clone(), observation);
                }
                Err(err) => warn!("failed to fetch weather for {city}: {err}"),
            }
        }

        report
    }

    /// Idempotent bucket provisioning. A lost creation race counts as
    /// success; any other failure is logged and the run proceeds to the
    /// write attempt anyway.
    pub async fn ensure_bucket(&self, bucket: &str) {
        match self.store.head_bucket(bucket).await {
            Ok(true) => info!("bucket {bucket} exists"),
            Ok(false) => {
                info!("creating bucket {bucket}");
                match self.store.create_bucket(bucket).await {
                    Ok(()) => info!("created bucket {bucket}"),
                    Err(StoreError::BucketAlreadyExists(_)) => info!("bucket {bucket} exists"),
                    Err(err) => warn!("failed to create bucket {bucket}: {err}"),
                }
            }
            Err(err) => warn!("failed to check bucket {bucket}: {err}"),
        }
    }

    /// Serialize `report` and write it under a fresh timestamped key.
    /// An empty report is skipped, not written and not an error. Write
    /// failures surface to the caller; nothing retries here.
    pub async fn persist(
        &self,
        report: &AggregateReport,
        bucket: &str,
    ) -> Result<PersistOutcome, PersistError> {
        if report.is_empty() {
            info!("report is empty, nothing to persist");
            return Ok(PersistOutcome::Skipped);
        }

        let key = object_key(Local::now().naive_local());
        let body = serde_json::to_vec(report)?;
        self.store.put_object(bucket, &key, body, "application/json").await?;

        info!("saved aggregated weather data to {bucket}/{key}");
        Ok(PersistOutcome::Stored(StoredObject { bucket: bucket.to_string(), key }))
    }
}

/// Key for a report collected at `at`: unique per second and
/// lexicographically time-ordered.
fn object_key(at: NaiveDateTime) -> String {
    format!("weather-data/daily-summary-{}.json", at.format("%Y%m%d-%H%M%S"))
}

//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration handling (environment-sourced credentials and targets)
//! - Abstractions over the weather provider, object store and notification sink
//! - The collection pipeline: fetch → normalize → aggregate → persist
//! - The notification pipeline: storage event → read → render → publish
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or
//! services (e.g. a function runtime wrapping [`Notifier`]).

pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod notifier;
pub mod notify;
pub mod provider;
pub mod render;
pub mod store;

pub use collector::{Collector, PersistOutcome};
pub use config::{Config, ConfigError};
pub use error::{FetchError, NotifyError, PersistError, ReportError, StoreError};
pub use model::{AggregateReport, CityObservation, StorageEvent, StoredObject};
pub use notifier::{HandlerResponse, Notifier};
pub use notify::NotificationSink;
pub use provider::WeatherProvider;
pub use store::ObjectStore;

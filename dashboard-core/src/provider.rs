use crate::{error::FetchError, model::CityObservation};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the upstream weather source.
///
/// The collector only ever needs one operation: current conditions for a
/// named city, already normalized into display strings.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn observe(&self, city: &str) -> Result<CityObservation, FetchError>;
}

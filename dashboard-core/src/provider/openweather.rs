use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::FetchError, model::CityObservation};

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }

    /// Fetch and decode the current-weather payload for `city`.
    pub async fn fetch_raw(&self, city: &str) -> Result<OwCurrentResponse, FetchError> {
        let body = self.get_current(city).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the full, unmodeled payload for `city`. Used by the API smoke
    /// test to show everything the provider returns.
    pub async fn probe(&self, city: &str) -> Result<serde_json::Value, FetchError> {
        let body = self.get_current(city).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_current(&self, city: &str) -> Result<String, FetchError> {
        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "imperial")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn observe(&self, city: &str) -> Result<CityObservation, FetchError> {
        let payload = self.fetch_raw(city).await?;
        normalize(&payload)
    }
}

/// Turn a raw payload into frozen display strings.
///
/// Sunrise and sunset are the provider's UTC epochs shifted by the city's
/// UTC offset and rendered without a zone suffix, i.e. local civil time.
pub fn normalize(payload: &OwCurrentResponse) -> Result<CityObservation, FetchError> {
    let conditions = payload
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(CityObservation {
        temperature: Some(format!("{:.1}°F", payload.main.temp)),
        feels_like: Some(format!("{:.1}°F", payload.main.feels_like)),
        humidity: Some(format!("{}%", payload.main.humidity)),
        conditions: Some(conditions),
        wind_speed: Some(format!("{:.1} mph", payload.wind.speed)),
        sunrise: Some(civil_time(payload.sys.sunrise, payload.timezone)?),
        sunset: Some(civil_time(payload.sys.sunset, payload.timezone)?),
    })
}

fn civil_time(epoch: i64, utc_offset: i64) -> Result<String, FetchError> {
    epoch
        .checked_add(utc_offset)
        .and_then(|shifted| DateTime::from_timestamp(shifted, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .ok_or(FetchError::InvalidTimestamp(epoch))
}

#[derive(Debug, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct OwWeather {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct OwWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwSys {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub struct OwCurrentResponse {
    pub main: OwMain,
    #[serde(default)]
    pub weather: Vec<OwWeather>,
    pub wind: OwWind,
    pub sys: OwSys,
    /// UTC offset of the city, in seconds.
    pub timezone: i64,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One city's normalized weather snapshot.
///
/// Every field is a pre-rendered display string, frozen when the observation
/// is collected. Fields are optional so a stored report missing one still
/// deserializes; the renderer substitutes `N/A` for anything absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityObservation {
    /// Unit-suffixed temperature, e.g. "72.4°F".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<String>,

    /// Percent-suffixed, e.g. "70%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,

    /// Free-text description from the provider, e.g. "clear sky".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,

    /// Speed-suffixed, e.g. "8.5 mph".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,

    /// Local civil time, `YYYY-MM-DD HH:MM:SS`, no zone suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
}

/// One collection run's output: city name → observation, in configured
/// city-list order. The unit of persistence and notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateReport(IndexMap<String, CityObservation>);

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, city: impl Into<String>, observation: CityObservation) {
        self.0.insert(city.into(), observation);
    }

    pub fn get(&self, city: &str) -> Option<&CityObservation> {
        self.0.get(city)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Cities and observations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CityObservation)> {
        self.0.iter()
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Location of a persisted report in the object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
}

/// Bucket-notification payload consumed by the notifier:
/// `{ "detail": { "bucket": { "name": ... }, "object": { "key": ... } } }`.
///
/// Every level is optional so any JSON object parses; [`Self::bucket_and_key`]
/// decides whether the event is usable. Unknown fields are ignored, since
/// real bucket events carry plenty of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<EventDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<BucketRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl StorageEvent {
    /// The event a bucket notification would carry for `object`.
    pub fn for_object(object: &StoredObject) -> Self {
        Self {
            detail: Some(EventDetail {
                bucket: Some(BucketRef { name: Some(object.bucket.clone()) }),
                object: Some(ObjectRef { key: Some(object.key.clone()) }),
            }),
        }
    }

    /// Bucket name and object key, if the event names both.
    pub fn bucket_and_key(&self) -> Option<(&str, &str)> {
        let detail = self.detail.as_ref()?;
        let bucket = detail.bucket.as_ref()?.name.as_deref()?;
        let key = detail.object.as_ref()?.key.as_deref()?;
        Some((bucket, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(label: &str) -> CityObservation {
        CityObservation {
            temperature: Some(format!("{label}°F")),
            feels_like: Some(format!("{label}°F")),
            humidity: Some("70%".to_string()),
            conditions: Some("clear sky".to_string()),
            wind_speed: Some("8.5 mph".to_string()),
            sunrise: Some("2023-11-14 12:13:20".to_string()),
            sunset: Some("2023-11-14 23:20:00".to_string()),
        }
    }

    #[test]
    fn report_preserves_insertion_order() {
        let mut report = AggregateReport::new();
        report.insert("Honolulu", observation("75.0"));
        report.insert("Helsinki", observation("20.0"));
        report.insert("Houston", observation("90.0"));

        let cities: Vec<&str> = report.cities().collect();
        assert_eq!(cities, vec!["Honolulu", "Helsinki", "Houston"]);
    }

    #[test]
    fn report_json_round_trip() {
        let mut report = AggregateReport::new();
        report.insert("Hilo", observation("75.0"));
        report.insert("Helsinki", observation("20.0"));

        let json = serde_json::to_string(&report).expect("serialize");
        let parsed: AggregateReport = serde_json::from_str(&json).expect("parse");

        assert_eq!(parsed, report);
        let cities: Vec<&str> = parsed.cities().collect();
        assert_eq!(cities, vec!["Hilo", "Helsinki"]);
    }

    #[test]
    fn observation_tolerates_missing_fields() {
        let parsed: CityObservation =
            serde_json::from_str(r#"{"temperature":"75.0°F"}"#).expect("parse");

        assert_eq!(parsed.temperature.as_deref(), Some("75.0°F"));
        assert_eq!(parsed.humidity, None);
        assert_eq!(parsed.sunset, None);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let observation = CityObservation {
            temperature: Some("75.0°F".to_string()),
            ..CityObservation::default()
        };

        let json = serde_json::to_string(&observation).expect("serialize");
        assert_eq!(json, r#"{"temperature":"75.0°F"}"#);
    }

    #[test]
    fn event_parses_full_shape() {
        let raw = r#"{
            "version": "0",
            "detail-type": "Object Created",
            "detail": {
                "bucket": { "name": "weather-dashboard" },
                "object": { "key": "weather-data/daily-summary-20231114-121320.json", "size": 512 }
            }
        }"#;

        let event: StorageEvent = serde_json::from_str(raw).expect("parse");
        assert_eq!(
            event.bucket_and_key(),
            Some(("weather-dashboard", "weather-data/daily-summary-20231114-121320.json"))
        );
    }

    #[test]
    fn event_without_detail_is_not_usable() {
        let event: StorageEvent = serde_json::from_str("{}").expect("parse");
        assert_eq!(event.bucket_and_key(), None);
    }

    #[test]
    fn event_missing_object_key_is_not_usable() {
        let raw = r#"{ "detail": { "bucket": { "name": "weather-dashboard" } } }"#;
        let event: StorageEvent = serde_json::from_str(raw).expect("parse");
        assert_eq!(event.bucket_and_key(), None);
    }

    #[test]
    fn event_for_object_round_trips() {
        let object = StoredObject {
            bucket: "weather-dashboard".to_string(),
            key: "weather-data/daily-summary-20231114-121320.json".to_string(),
        };

        let event = StorageEvent::for_object(&object);
        let json = serde_json::to_string(&event).expect("serialize");
        let parsed: StorageEvent = serde_json::from_str(&json).expect("parse");

        assert_eq!(parsed.bucket_and_key(), Some((object.bucket.as_str(), object.key.as_str())));
    }
}

use std::{env, path::PathBuf};

/// City list used when `WEATHER_CITIES` is not set.
pub const DEFAULT_CITIES: &[&str] = &["Honolulu", "Helsinki", "Houston", "Hilo"];

const DEFAULT_DATA_DIR: &str = "weather-data-store";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "required environment variable {0} is not set.\n\
         Hint: export it, or add it to a .env file next to the binary."
    )]
    Missing(&'static str),
}

/// Runtime configuration, sourced from the environment.
///
/// The credential, bucket and topic are each required only by the paths that
/// use them, so lookup never fails up front; the accessors report the exact
/// variable a command is missing.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: Option<String>,
    bucket: Option<String>,
    topic: Option<String>,

    /// Ordered city list for a collection run.
    pub cities: Vec<String>,

    /// Root directory of the filesystem object store.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Lets tests supply a map
    /// instead of mutating the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let cities = get("WEATHER_CITIES")
            .map(|raw| parse_cities(&raw))
            .unwrap_or_else(|| DEFAULT_CITIES.iter().map(|s| (*s).to_string()).collect());

        let data_dir =
            get("DASHBOARD_DATA_DIR").map(PathBuf::from).unwrap_or_else(|| DEFAULT_DATA_DIR.into());

        // A variable set to the empty string is as unusable as an unset one.
        let required = |name| get(name).filter(|value: &String| !value.is_empty());

        Self {
            api_key: required("OPENWEATHER_API_KEY"),
            bucket: required("AWS_BUCKET_NAME"),
            topic: required("SNS_TOPIC_ARN"),
            cities,
            data_dir,
        }
    }

    /// Upstream weather credential (`OPENWEATHER_API_KEY`).
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::Missing("OPENWEATHER_API_KEY"))
    }

    /// Destination bucket for aggregate reports (`AWS_BUCKET_NAME`).
    pub fn bucket(&self) -> Result<&str, ConfigError> {
        self.bucket.as_deref().ok_or(ConfigError::Missing("AWS_BUCKET_NAME"))
    }

    /// Notification topic the rendered report is published to
    /// (`SNS_TOPIC_ARN`).
    pub fn topic(&self) -> Result<&str, ConfigError> {
        self.topic.as_deref().ok_or(ConfigError::Missing("SNS_TOPIC_ARN"))
    }
}

fn parse_cities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|city| !city.is_empty()).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn accessors_report_the_missing_variable() {
        let cfg = Config::from_lookup(lookup(&[]));

        let err = cfg.api_key().unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));

        let err = cfg.bucket().unwrap_err();
        assert!(err.to_string().contains("AWS_BUCKET_NAME"));

        let err = cfg.topic().unwrap_err();
        assert!(err.to_string().contains("SNS_TOPIC_ARN"));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let cfg = Config::from_lookup(lookup(&[("OPENWEATHER_API_KEY", "")]));
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn reads_required_variables() {
        let cfg = Config::from_lookup(lookup(&[
            ("OPENWEATHER_API_KEY", "KEY"),
            ("AWS_BUCKET_NAME", "weather-dashboard"),
            ("SNS_TOPIC_ARN", "http://localhost:9000/notify"),
        ]));

        assert_eq!(cfg.api_key().expect("api key"), "KEY");
        assert_eq!(cfg.bucket().expect("bucket"), "weather-dashboard");
        assert_eq!(cfg.topic().expect("topic"), "http://localhost:9000/notify");
    }

    #[test]
    fn default_city_list_in_order() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg.cities, vec!["Honolulu", "Helsinki", "Houston", "Hilo"]);
    }

    #[test]
    fn city_list_parses_and_trims() {
        let cfg = Config::from_lookup(lookup(&[("WEATHER_CITIES", "Hilo, Oslo ,,Kyiv")]));
        assert_eq!(cfg.cities, vec!["Hilo", "Oslo", "Kyiv"]);
    }

    #[test]
    fn data_dir_default_and_override() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg.data_dir, PathBuf::from("weather-data-store"));

        let cfg = Config::from_lookup(lookup(&[("DASHBOARD_DATA_DIR", "/var/lib/dashboard")]));
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/dashboard"));
    }
}

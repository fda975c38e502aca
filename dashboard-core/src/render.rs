use crate::model::{AggregateReport, CityObservation};

const HEADER: &str = "Weather Dashboard Report:";
const MISSING: &str = "N/A";

/// Render `report` as the plain-text dashboard message.
///
/// Deterministic: the same report always yields byte-identical text, derived
/// only from the stored display strings. A field absent from a city's record
/// renders as `N/A` without affecting the rest of the report.
pub fn render(report: &AggregateReport) -> String {
    let mut out = String::from(HEADER);
    out.push_str("\n\n");

    for (city, data) in report.iter() {
        out.push_str(&format!("City: {city}\n"));
        out.push_str(&format!("- Temperature: {}\n", field(&data.temperature)));
        out.push_str(&format!("- Feels Like: {}\n", field(&data.feels_like)));
        out.push_str(&format!("- Humidity: {}\n", field(&data.humidity)));
        out.push_str(&format!("- Conditions: {}\n", field(&data.conditions)));
        out.push_str(&format!("- Wind Speed: {}\n", field(&data.wind_speed)));
        out.push_str(&format!("- Sunrise: {}\n", field(&data.sunrise)));
        out.push_str(&format!("- Sunset: {}\n", field(&data.sunset)));
        out.push('\n');
    }

    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hilo() -> CityObservation {
        CityObservation {
            temperature: Some("75.0°F".to_string()),
            feels_like: Some("77.2°F".to_string()),
            humidity: Some("70%".to_string()),
            conditions: Some("clear sky".to_string()),
            wind_speed: Some("8.5 mph".to_string()),
            sunrise: Some("2023-11-14 12:13:20".to_string()),
            sunset: Some("2023-11-14 23:20:00".to_string()),
        }
    }

    #[test]
    fn renders_one_city_block_exactly() {
        let mut report = AggregateReport::new();
        report.insert("Hilo", hilo());

        let expected = "Weather Dashboard Report:\n\n\
                        City: Hilo\n\
                        - Temperature: 75.0°F\n\
                        - Feels Like: 77.2°F\n\
                        - Humidity: 70%\n\
                        - Conditions: clear sky\n\
                        - Wind Speed: 8.5 mph\n\
                        - Sunrise: 2023-11-14 12:13:20\n\
                        - Sunset: 2023-11-14 23:20:00\n\n";

        assert_eq!(render(&report), expected);
    }

    #[test]
    fn render_is_deterministic() {
        let mut report = AggregateReport::new();
        report.insert("Hilo", hilo());
        report.insert("Helsinki", hilo());

        assert_eq!(render(&report), render(&report));
    }

    #[test]
    fn cities_render_in_report_order() {
        let mut report = AggregateReport::new();
        report.insert("Honolulu", hilo());
        report.insert("Hilo", hilo());

        let text = render(&report);
        let honolulu = text.find("City: Honolulu").expect("Honolulu block");
        let hilo = text.find("City: Hilo").expect("Hilo block");
        assert!(honolulu < hilo);
    }

    #[test]
    fn missing_field_renders_as_na() {
        // A stored report may predate a field; parse one with no humidity.
        let raw = r#"{
            "Hilo": {
                "temperature": "75.0°F",
                "feels_like": "77.2°F",
                "conditions": "clear sky",
                "wind_speed": "8.5 mph",
                "sunrise": "2023-11-14 12:13:20",
                "sunset": "2023-11-14 23:20:00"
            },
            "Helsinki": { "temperature": "20.1°F" }
        }"#;
        let report: AggregateReport = serde_json::from_str(raw).expect("parse");

        let text = render(&report);
        assert!(text.contains("- Humidity: N/A\n"));
        assert!(text.contains("- Temperature: 75.0°F\n"));
        assert!(text.contains("- Temperature: 20.1°F\n"));
        assert!(text.contains("- Conditions: N/A\n"));
    }

    #[test]
    fn empty_report_is_just_the_header() {
        assert_eq!(render(&AggregateReport::new()), "Weather Dashboard Report:\n\n");
    }
}

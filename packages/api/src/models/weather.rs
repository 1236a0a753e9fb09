//! `/api/weather/*` payloads.
//!
//! The service aggregates a third-party provider with a random fallback, so
//! every field is optional on the wire and defaults here.

use serde::{Deserialize, Serialize};

use super::lenient_f64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[default]
    #[serde(other)]
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temp: f64,
    #[serde(default)]
    pub condition: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: f64,
    #[serde(default, rename = "windSpeed", alias = "wind_speed", deserialize_with = "lenient_f64")]
    pub wind_speed: f64,
    #[serde(default)]
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temp: f64,
    #[serde(default)]
    pub condition: String,
    /// Chance of rain in percent.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rain: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(default, deserialize_with = "store::models::string_or_number")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "timestamp")]
    pub time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IrrigationAdvice {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub next_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activities {
    #[serde(default)]
    pub recommended: Vec<String>,
    #[serde(default)]
    pub restricted: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Advisories {
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
    #[serde(default)]
    pub irrigation: Option<IrrigationAdvice>,
    #[serde(default)]
    pub activities: Activities,
}

/// Everything `/api/weather/all` returns for one location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    #[serde(default)]
    pub advisories: Advisories,
}

impl WeatherReport {
    pub fn high_severity_alerts(&self) -> impl Iterator<Item = &WeatherAlert> {
        self.advisories
            .alerts
            .iter()
            .filter(|a| a.severity == Severity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report() {
        let report: WeatherReport = serde_json::from_str(
            r#"{
                "current": {"temp": 31.4, "condition": "Sunny", "humidity": 40, "windSpeed": 12, "location": "Multan"},
                "forecast": [{"day": "Mon", "temp": 30.1, "condition": "Cloudy", "rain": 20}],
                "advisories": {
                    "alerts": [
                        {"id": "a1", "type": "weather", "severity": "high", "title": "Heavy Rainfall", "message": "48h", "time": "2 hours ago"},
                        {"id": 2, "type": "wind", "severity": "moderate", "title": "Wind", "message": "", "timestamp": "Just Now"}
                    ],
                    "irrigation": {"status": "Skip", "message": "Rain expected", "next_date": "Friday"},
                    "activities": {"recommended": ["Spraying"], "restricted": ["Harvesting"]}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(report.current.wind_speed, 12.0);
        assert_eq!(report.forecast[0].rain, 20.0);
        assert_eq!(report.advisories.alerts[1].severity, Severity::Low);
        assert_eq!(report.advisories.alerts[1].time, "Just Now");
        assert_eq!(report.high_severity_alerts().count(), 1);
        assert_eq!(report.advisories.irrigation.as_ref().unwrap().next_date, "Friday");
        assert_eq!(report.advisories.activities.restricted, vec!["Harvesting"]);
    }

    #[test]
    fn empty_object_is_default() {
        let report: WeatherReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, WeatherReport::default());
        assert!(report.advisories.irrigation.is_none());
    }
}

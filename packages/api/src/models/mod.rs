//! Request and response payloads for every backend endpoint family.
//!
//! The backend is a loosely-typed JSON API: numbers sometimes arrive as
//! strings, optional fields are `null` or missing, and a few endpoints return
//! either a single object or an array. The types here absorb that so views
//! only ever see well-formed Rust values.

mod admin;
mod dashboard;
mod farm;
mod market;
mod notification;
mod prediction;
mod user;
mod weather;

pub use admin::{ConnectivityStat, HealthMetric, IspStat, LogPage, NetworkReport, UndoOutcome};
pub use dashboard::{
    DashboardAlert, DashboardStats, HealthScore, PredictedYield, WeatherRisk, YieldTrend,
};
pub use farm::{Farm, FarmDraft};
pub use market::{CropAdvisory, MarketPriceEntry, PriceChange, PricePoint, Trend};
pub use notification::{unread_count, Notification};
pub use prediction::{
    CropRecommendation, CropRecommendationRequest, PestDetection, PredictionRecord, YieldPrediction,
    YieldRequest,
};
pub use user::{NewUser, UserUpdate};
pub use weather::{
    Activities, Advisories, CurrentWeather, ForecastDay, IrrigationAdvice, Severity, WeatherAlert,
    WeatherReport,
};

use serde::{Deserialize, Deserializer};

/// A payload that may be a single object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Deserialize a number that may be sent as a JSON number, a numeric string or `null`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Num {
        Num(f64),
        Str(String),
        Null(()),
    }

    Ok(match Num::deserialize(deserializer)? {
        Num::Num(n) => n,
        Num::Str(s) => s.trim().parse().unwrap_or(0.0),
        Num::Null(()) => 0.0,
    })
}

/// Render a backend timestamp (ISO 8601, with or without offset) as `YYYY-MM-DD`.
///
/// Returns `None` for anything unparsable so callers can substitute their own
/// placeholder ("N/A", "Never", ...).
pub fn display_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
    }

    #[test]
    fn one_or_many_accepts_both_shapes() {
        let many: OneOrMany<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(many.into_vec(), vec![1, 2, 3]);
        let one: OneOrMany<u32> = serde_json::from_str("7").unwrap();
        assert_eq!(one.into_vec(), vec![7]);
    }

    #[test]
    fn lenient_numbers() {
        let w: Wrapper = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(w.value, 12.5);
        let w: Wrapper = serde_json::from_str(r#"{"value": " 40 "}"#).unwrap();
        assert_eq!(w.value, 40.0);
        let w: Wrapper = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(w.value, 0.0);
    }

    #[test]
    fn dates_from_backend() {
        assert_eq!(display_date("2025-01-02T10:11:12.123456").as_deref(), Some("2025-01-02"));
        assert_eq!(display_date("2025-03-04T00:00:00+05:00").as_deref(), Some("2025-03-04"));
        assert_eq!(display_date("2024-12-31").as_deref(), Some("2024-12-31"));
        assert_eq!(display_date("yesterday"), None);
    }
}

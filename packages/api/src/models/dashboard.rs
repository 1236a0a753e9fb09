use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// A 0-100 score with a status word and a colour hint (`green`, `amber`, `red`, `gray`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub color: String,
}

impl Default for HealthScore {
    fn default() -> Self {
        Self {
            score: 0.0,
            status: "No Data".to_string(),
            color: "gray".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherRisk {
    #[serde(default)]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percentage: f64,
}

impl Default for WeatherRisk {
    fn default() -> Self {
        Self {
            level: "Low".to_string(),
            percentage: 0.0,
        }
    }
}

/// `/api/dashboard/stats`. Admins get global counts, farmers their own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub farms: u64,
    #[serde(default)]
    pub predictions: u64,
    #[serde(default)]
    pub soil_health: HealthScore,
    #[serde(default)]
    pub crop_health: HealthScore,
    #[serde(default)]
    pub weather_risk: WeatherRisk,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub system_status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardAlert {
    #[serde(deserialize_with = "store::models::string_or_number")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub severity: super::Severity,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Predicted yield per crop, with the bar colour the backend suggests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedYield {
    pub crop: String,
    #[serde(rename = "yield", deserialize_with = "lenient_f64")]
    pub value: f64,
    #[serde(default)]
    pub fill: Option<String>,
}

/// Historical against predicted yield for one period. Forecast periods have no history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldTrend {
    pub period: String,
    #[serde(default)]
    pub historical: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub predicted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_with_defaults() {
        let stats: DashboardStats = serde_json::from_str(r#"{"farms": 2}"#).unwrap();
        assert_eq!(stats.farms, 2);
        assert_eq!(stats.soil_health.status, "No Data");
        assert_eq!(stats.weather_risk.level, "Low");
    }

    #[test]
    fn full_stats() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"users": 1, "farms": 3, "predictions": 9,
                "soil_health": {"score": 75, "status": "Optimal", "color": "green"},
                "crop_health": {"score": 82, "status": "Good", "color": "green"},
                "weather_risk": {"level": "Low", "percentage": 15},
                "uptime": "99.9%", "system_status": "Healthy"}"#,
        )
        .unwrap();
        assert_eq!(stats.soil_health.score, 75.0);
        assert_eq!(stats.weather_risk.percentage, 15.0);
        assert_eq!(stats.uptime.as_deref(), Some("99.9%"));
    }

    #[test]
    fn trends_and_yields() {
        let trends: Vec<YieldTrend> = serde_json::from_str(
            r#"[{"period": "2025 Q4", "historical": 4.1, "predicted": 4.3},
                {"period": "2026 Q1 (Forecast)", "historical": null, "predicted": 4.6}]"#,
        )
        .unwrap();
        assert_eq!(trends[0].historical, Some(4.1));
        assert_eq!(trends[1].historical, None);

        let yields: Vec<PredictedYield> =
            serde_json::from_str(r##"[{"crop": "Wheat", "yield": 45.2, "fill": "#fbbf24"}]"##).unwrap();
        assert_eq!(yields[0].value, 45.2);
    }

    #[test]
    fn alert_with_prefixed_id() {
        let alert: DashboardAlert = serde_json::from_str(
            r#"{"id": "db-4", "type": "warning", "severity": "medium", "title": "Frost",
                "message": "Cover", "timestamp": "06:00 AM"}"#,
        )
        .unwrap();
        assert_eq!(alert.id, "db-4");
        assert_eq!(alert.severity, crate::models::Severity::Medium);
    }
}

use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// Average latency and reach per region (`/api/admin/connectivity-stats`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityStat {
    pub region: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latency: f64,
    #[serde(default, rename = "packetLoss", alias = "packet_loss", deserialize_with = "lenient_f64")]
    pub packet_loss: f64,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub quality: String,
}

/// `/api/admin/isp-performance`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IspStat {
    pub isp: String,
    #[serde(default, rename = "avgLatency", alias = "avg_latency", deserialize_with = "lenient_f64")]
    pub avg_latency: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub reliability: f64,
    #[serde(default)]
    pub users: u64,
}

/// One row of `/api/admin/system/health`. `status` is `good` or `bad`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub metric: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl HealthMetric {
    pub fn is_good(&self) -> bool {
        self.status.eq_ignore_ascii_case("good")
    }

    pub fn value_label(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{}{unit}", self.value),
            None => format!("{}%", self.value),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Result of `POST /api/admin/undo`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

impl UndoOutcome {
    pub fn message_or_default(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Undo successful")
    }
}

/// A client-side latency sample sent to `POST /api/admin/network/report`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NetworkReport {
    pub latency: f64,
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_and_isp_rows() {
        let stats: Vec<ConnectivityStat> = serde_json::from_str(
            r#"[{"region": "Punjab", "latency": 42.5, "packetLoss": 0.8, "users": 156, "quality": "Excellent"}]"#,
        )
        .unwrap();
        assert_eq!(stats[0].packet_loss, 0.8);

        let isps: Vec<IspStat> =
            serde_json::from_str(r#"[{"isp": "Jazz", "avgLatency": 45, "reliability": 98.5, "users": 235}]"#)
                .unwrap();
        assert_eq!(isps[0].avg_latency, 45.0);
    }

    #[test]
    fn health_metric_labels() {
        let metrics: Vec<HealthMetric> = serde_json::from_str(
            r#"[{"metric": "CPU Usage", "value": 62.5, "status": "good"},
                {"metric": "API Response", "value": 120, "unit": "ms", "status": "bad"}]"#,
        )
        .unwrap();
        assert_eq!(metrics[0].value_label(), "62.5%");
        assert!(metrics[0].is_good());
        assert_eq!(metrics[1].value_label(), "120ms");
        assert!(!metrics[1].is_good());
    }

    #[test]
    fn undo_message_fallback() {
        assert_eq!(UndoOutcome::default().message_or_default(), "Undo successful");
        let outcome = UndoOutcome {
            message: Some("Restored user Ali".into()),
        };
        assert_eq!(outcome.message_or_default(), "Restored user Ali");
    }

    #[test]
    fn report_skips_unknown_region() {
        let json = serde_json::to_value(NetworkReport {
            latency: 120.0,
            quality: "Excellent".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"latency": 120.0, "quality": "Excellent"}));
    }
}

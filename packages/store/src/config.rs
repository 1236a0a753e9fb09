//! # Client configuration: `agri.toml`
//!
//! The web binary embeds an `agri.toml` and parses it into [`AppConfig`] at
//! startup. Every section and field has a default, so an empty file is a
//! valid configuration.
//!
//! ```toml
//! [api]
//! base_url = ""              # empty = same origin as the page
//!
//! [polling]
//! notifications_secs = 60
//! market_secs = 30
//! network_secs = 30
//!
//! [telemetry]
//! report_sample_rate = 0.2   # share of latency probes reported to the backend
//!
//! [weather]
//! default_location = "Islamabad"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST backend, without the `/api` suffix.
    /// Empty means "same origin as the page".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_notifications_secs")]
    pub notifications_secs: u32,
    #[serde(default = "default_market_secs")]
    pub market_secs: u32,
    #[serde(default = "default_network_secs")]
    pub network_secs: u32,
}

fn default_notifications_secs() -> u32 {
    60
}

fn default_market_secs() -> u32 {
    30
}

fn default_network_secs() -> u32 {
    30
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            notifications_secs: default_notifications_secs(),
            market_secs: default_market_secs(),
            network_secs: default_network_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Fraction of network probes reported to the backend, clamped to `0.0..=1.0`.
    #[serde(default = "default_sample_rate")]
    pub report_sample_rate: f64,
}

fn default_sample_rate() -> f64 {
    0.2
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            report_sample_rate: default_sample_rate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_location")]
    pub default_location: String,
}

fn default_location() -> String {
    "Islamabad".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
        }
    }
}

impl AppConfig {
    /// Builder method to override the backend origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The configured origin, or `fallback` when none is set.
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn base_url_or(&self, fallback: &str) -> String {
        let url = if self.api.base_url.trim().is_empty() {
            fallback
        } else {
            self.api.base_url.trim()
        };
        url.trim_end_matches('/').to_string()
    }

    pub fn sample_rate(&self) -> f64 {
        self.telemetry.report_sample_rate.clamp(0.0, 1.0)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.polling.notifications_secs, 60);
        assert_eq!(config.polling.network_secs, 30);
        assert_eq!(config.weather.default_location, "Islamabad");
        assert!((config.sample_rate() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://agri.example.com/"

            [polling]
            market_secs = 45
            "#,
        )
        .unwrap();
        assert_eq!(config.polling.market_secs, 45);
        assert_eq!(config.polling.notifications_secs, 60);
        assert_eq!(config.base_url_or("http://localhost:5000"), "https://agri.example.com");
    }

    #[test]
    fn test_base_url_fallback_and_sample_clamp() {
        let mut config = AppConfig::default();
        assert_eq!(config.base_url_or("http://localhost:5000/"), "http://localhost:5000");

        config.telemetry.report_sample_rate = 3.0;
        assert_eq!(config.sample_rate(), 1.0);

        let config = config.with_base_url("http://10.0.0.2:5000");
        assert_eq!(config.base_url_or("ignored"), "http://10.0.0.2:5000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_base_url("http://api.local");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}

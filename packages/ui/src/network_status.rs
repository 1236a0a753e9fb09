//! Connection quality indicator for the navbar.
//!
//! Every `polling.network_secs` the component times a `GET /api/health`,
//! buckets the round trip into a [`Quality`] and, for a sampled share of
//! probes, reports it to `POST /api/admin/network/report`.

use std::fmt;
use std::time::Duration;

use api::models::NetworkReport;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_config;
use crate::icons::{FaSignal, FaWifi};
use crate::{platform, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
    Offline,
}

impl Quality {
    /// Bucket a measured round trip in milliseconds.
    pub fn from_latency(ms: f64) -> Self {
        if ms > 500.0 {
            Quality::Poor
        } else if ms > 300.0 {
            Quality::Fair
        } else if ms > 150.0 {
            Quality::Good
        } else {
            Quality::Excellent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Excellent => "Excellent",
            Quality::Good => "Good",
            Quality::Fair => "Fair",
            Quality::Poor => "Poor",
            Quality::Offline => "Offline",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Quality::Excellent => "text-green",
            Quality::Good => "text-blue",
            Quality::Fair => "text-yellow",
            Quality::Poor => "text-orange",
            Quality::Offline => "text-red",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Probe {
    latency: Option<f64>,
    quality: Quality,
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            latency: None,
            quality: Quality::Offline,
        }
    }
}

/// Whether a probe should be reported, given a uniform `roll` in `0..1`.
pub fn should_report(roll: f64, sample_rate: f64) -> bool {
    roll < sample_rate
}

#[component]
pub fn NetworkStatus() -> Element {
    let auth = use_auth();
    let config = use_config();
    let mut probe = use_signal(Probe::default);
    let mut show_tooltip = use_signal(|| false);

    let interval = Duration::from_secs(u64::from(config.polling.network_secs.max(1)));
    let sample_rate = config.sample_rate();

    use_effect(move || {
        spawn(async move {
            loop {
                // Only signed-in users are measured
                if auth.user().is_some() {
                    let client = auth.client();
                    let start = platform::now_ms();
                    match client.ping().await {
                        Ok(_) => {
                            let latency = (platform::now_ms() - start).round();
                            let quality = Quality::from_latency(latency);
                            probe.set(Probe {
                                latency: Some(latency),
                                quality,
                            });

                            if should_report(platform::random(), sample_rate) {
                                let region = auth
                                    .user()
                                    .and_then(|u| u.location)
                                    .unwrap_or_else(|| "Auto".to_string());
                                let report = NetworkReport {
                                    latency,
                                    quality: quality.to_string(),
                                    region: Some(region),
                                    isp: Some("Auto".to_string()),
                                };
                                if let Err(e) = client.report_network(&report).await {
                                    tracing::debug!("network report dropped: {e}");
                                }
                            }
                        }
                        Err(e) => {
                            tracing::debug!("health probe failed: {e}");
                            probe.set(Probe::default());
                        }
                    }
                }
                platform::sleep(interval).await;
            }
        });
    });

    let state = auth.state();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let current = probe();
    let region = user.location.clone().unwrap_or_else(|| "Local".to_string());
    let latency_short = current
        .latency
        .map(|ms| format!(" ({ms}ms)"))
        .unwrap_or_default();
    let latency_long = current
        .latency
        .map(|ms| format!("{ms} ms"))
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div { class: "network-status",
            button {
                class: "network-status-button {current.quality.color_class()}",
                onmouseenter: move |_| show_tooltip.set(true),
                onmouseleave: move |_| show_tooltip.set(false),
                span { class: if current.quality == Quality::Offline { "network-offline" } else { "" },
                    Icon { icon: FaWifi, width: 14, height: 14 }
                }
                span { class: "network-status-label", "{current.quality}{latency_short}" }
            }
            if show_tooltip() {
                div { class: "network-tooltip",
                    h4 {
                        Icon { icon: FaSignal, width: 10, height: 10 }
                        " Network Diagnostics"
                    }
                    div { class: "network-tooltip-row",
                        span { "Latency:" }
                        span { "{latency_long}" }
                    }
                    div { class: "network-tooltip-row",
                        span { "Quality:" }
                        span { class: "{current.quality.color_class()}", "{current.quality}" }
                    }
                    div { class: "network-tooltip-row",
                        span { "Region:" }
                        span { "{region}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_thresholds() {
        assert_eq!(Quality::from_latency(42.0), Quality::Excellent);
        assert_eq!(Quality::from_latency(150.0), Quality::Excellent);
        assert_eq!(Quality::from_latency(151.0), Quality::Good);
        assert_eq!(Quality::from_latency(300.0), Quality::Good);
        assert_eq!(Quality::from_latency(301.0), Quality::Fair);
        assert_eq!(Quality::from_latency(500.0), Quality::Fair);
        assert_eq!(Quality::from_latency(501.0), Quality::Poor);
    }

    #[test]
    fn quality_colors() {
        assert_eq!(Quality::Excellent.color_class(), "text-green");
        assert_eq!(Quality::Offline.color_class(), "text-red");
        assert_eq!(Quality::Poor.to_string(), "Poor");
    }

    #[test]
    fn sampling() {
        assert!(should_report(0.1, 0.2));
        assert!(!should_report(0.2, 0.2));
        assert!(!should_report(0.0, 0.0));
        assert!(should_report(0.99, 1.0));
    }
}

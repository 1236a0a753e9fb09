use api::models::{DashboardStats, PredictedYield, YieldTrend};
use api::{history_counts, DashboardOverview};
use dioxus::prelude::*;

use super::common::{severity_class, LoadingPanel, PageHeader};
use crate::auth::use_auth;
use crate::charts::{Bar, BarChart, ShareChart};
use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::icons::{
    FaArrowRight, FaBug, FaChartLine, FaCloudRain, FaDollarSign, FaHeartPulse, FaLeaf,
    FaSeedling, FaTriangleExclamation,
};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Per-acre expectation shown on the first card. The backend has no
/// endpoint for it yet, so farms on record imply the regional average.
pub fn expected_yield(stats: &DashboardStats) -> (f64, &'static str) {
    if stats.farms > 0 {
        (45.2, "muns/acre")
    } else {
        (0.0, "")
    }
}

fn yield_bars(yields: &[PredictedYield]) -> Vec<Bar> {
    yields
        .iter()
        .enumerate()
        .map(|(i, y)| Bar::new(y.crop.clone(), y.value, i).with_color(y.fill.clone()))
        .collect()
}

fn trend_label(trend: &YieldTrend) -> String {
    match trend.historical {
        Some(h) => format!("{h}"),
        None => "–".to_string(),
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AlertGlyph {
    Weather,
    Pest,
    Market,
    Other,
}

fn alert_glyph(kind: &str) -> AlertGlyph {
    match kind {
        "weather" => AlertGlyph::Weather,
        "pest" => AlertGlyph::Pest,
        "market" => AlertGlyph::Market,
        _ => AlertGlyph::Other,
    }
}

#[component]
fn AlertIcon(kind: String) -> Element {
    match alert_glyph(&kind) {
        AlertGlyph::Weather => rsx! { Icon { icon: FaCloudRain, width: 14, height: 14 } },
        AlertGlyph::Pest => rsx! { Icon { icon: FaBug, width: 14, height: 14 } },
        AlertGlyph::Market => rsx! { Icon { icon: FaDollarSign, width: 14, height: 14 } },
        AlertGlyph::Other => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
    }
}

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Predict Yield", "/yield"),
    ("Crop Recommendation", "/crop/recommendation"),
    ("Pest Detection", "/pest"),
    ("Check Weather", "/weather"),
];

#[component]
pub fn DashboardView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();

    let overview = use_resource(move || async move {
        match auth.client().dashboard_overview().await {
            Ok(overview) => overview,
            Err(e) => {
                if !auth.check(&e) {
                    tracing::error!("dashboard load failed: {e}");
                }
                DashboardOverview::default()
            }
        }
    });

    let Some(data) = overview.read().clone() else {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            LoadingPanel { label: "Loading your farm overview..." }
        };
    };

    let stats = &data.stats;
    let (yield_value, yield_unit) = expected_yield(stats);
    let price = data.headline_price().cloned().unwrap_or_default();
    let price_crop = if price.crop.is_empty() { "N/A".to_string() } else { price.crop.clone() };
    let history: Vec<Bar> = history_counts(&data.history)
        .into_iter()
        .enumerate()
        .map(|(i, (name, count))| Bar::new(name, count as f64, i))
        .collect();
    let bars = yield_bars(&data.predicted_yields);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Dashboard", subtitle: "Welcome back! Here's your farm overview" }

            div { class: "stat-grid stat-grid-5",
                Card { class: "stat-card",
                    CardContent {
                        p { class: "muted", "Expected Yield" }
                        h3 { "{yield_value} " span { class: "stat-unit", "{yield_unit}" } }
                        span { class: "stat-icon tone-green", Icon { icon: FaLeaf, width: 20, height: 20 } }
                    }
                }
                Card { class: "stat-card",
                    CardContent {
                        p { class: "muted", "Soil Health Score" }
                        h3 { "{stats.soil_health.score}/100" }
                        p { class: "text-green", "{stats.soil_health.status}" }
                        span { class: "stat-icon tone-amber", Icon { icon: FaHeartPulse, width: 20, height: 20 } }
                    }
                }
                Card { class: "stat-card",
                    CardContent {
                        p { class: "muted", "Weather Risk" }
                        h3 { "{stats.weather_risk.level}" }
                        div { class: "progress",
                            div { class: "progress-fill tone-yellow-fill", style: "width: {stats.weather_risk.percentage}%;" }
                        }
                        span { class: "stat-icon tone-blue", Icon { icon: FaCloudRain, width: 20, height: 20 } }
                    }
                }
                Card { class: "stat-card",
                    CardContent {
                        p { class: "muted", "Market Price ({price_crop})" }
                        h3 { "{price.price_label()}" }
                        p { class: if price.is_rising() { "text-green" } else { "text-red" }, "{price.change}" }
                        span { class: "stat-icon tone-green", Icon { icon: FaDollarSign, width: 20, height: 20 } }
                    }
                }
                Card { class: "stat-card",
                    CardContent {
                        p { class: "muted", "Crop Health" }
                        h3 { "{stats.crop_health.score}/100" }
                        p { class: "text-green", "{stats.crop_health.status}" }
                        span { class: "stat-icon tone-green", Icon { icon: FaSeedling, width: 20, height: 20 } }
                    }
                }
            }

            div { class: "grid-2",
                Card { class: "span-2",
                    CardHeader {
                        CardTitle { "Predicted vs Historical Yield" }
                        p { class: "muted small", "Growth trends over the recent seasons (Tons/Hectare)" }
                    }
                    CardContent {
                        if data.yield_trends.is_empty() {
                            p { class: "muted", "No trend data yet" }
                        } else {
                            table { class: "table",
                                thead { tr { th { "Period" } th { "Historical" } th { "Predicted" } } }
                                tbody {
                                    for trend in data.yield_trends.iter() {
                                        tr { key: "{trend.period}",
                                            td { "{trend.period}" }
                                            td { "{trend_label(trend)}" }
                                            td { class: "text-green", "{trend.predicted}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Predicted Yield by Crop Type" }
                        p { class: "muted small", "Comparison of projected production levels (Tons)" }
                    }
                    CardContent {
                        if bars.is_empty() {
                            p { class: "muted", "No predictions yet" }
                        } else {
                            BarChart { bars, unit: "t" }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Prediction Analysis Activity" }
                        p { class: "muted small", "Overview of recent analysis requests" }
                    }
                    CardContent {
                        if history.is_empty() {
                            p { class: "muted", "No analysis requests yet" }
                        } else {
                            ShareChart { bars: history }
                        }
                    }
                }
            }

            div { class: "grid-2",
                Card {
                    CardHeader { CardTitle { "Recent Alerts" } }
                    CardContent {
                        if data.alerts.is_empty() {
                            p { class: "muted", "No alerts" }
                        }
                        for alert in data.alerts.iter() {
                            div { key: "{alert.id}", class: "alert-row",
                                span { class: "alert-icon {severity_class(alert.severity)}",
                                    AlertIcon { kind: alert.kind.clone() }
                                }
                                div {
                                    p { class: "alert-title", "{alert.title}" }
                                    p { class: "muted small", "{alert.message}" }
                                    p { class: "muted small", "{alert.timestamp}" }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Quick Actions" } }
                    CardContent {
                        div { class: "quick-actions",
                            for (label, path) in QUICK_ACTIONS {
                                button {
                                    key: "{path}",
                                    class: "quick-action",
                                    onclick: move |_| on_navigate.call(path.to_string()),
                                    Icon { icon: FaChartLine, width: 20, height: 20 }
                                    span { "{label}" }
                                    Icon { icon: FaArrowRight, width: 12, height: 12 }
                                }
                            }
                        }
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
    fn expected_yield_needs_a_farm() {
        let mut stats = DashboardStats::default();
        assert_eq!(expected_yield(&stats), (0.0, ""));
        stats.farms = 2;
        assert_eq!(expected_yield(&stats), (45.2, "muns/acre"));
    }

    #[test]
    fn alert_kinds() {
        assert!(alert_glyph("weather") == AlertGlyph::Weather);
        assert!(alert_glyph("market") == AlertGlyph::Market);
        assert!(alert_glyph("frost") == AlertGlyph::Other);
    }

    #[test]
    fn forecast_periods_have_no_history() {
        let trend = YieldTrend {
            period: "2026 Q1 (Forecast)".to_string(),
            historical: None,
            predicted: 4.6,
        };
        assert_eq!(trend_label(&trend), "–");
    }

    #[test]
    fn backend_bar_colours_win() {
        let bars = yield_bars(&[
            PredictedYield { crop: "Wheat".into(), value: 45.2, fill: Some("#fbbf24".into()) },
            PredictedYield { crop: "Rice".into(), value: 32.8, fill: None },
        ]);
        assert_eq!(bars[0].color, "#fbbf24");
        assert_eq!(bars[1].color, crate::charts::PALETTE[1]);
    }
}

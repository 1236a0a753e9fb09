//! Results for the saved yield draft.
//!
//! The draft is posted to `/api/predict/yield`. When the model is
//! unreachable the page falls back to a table-based estimate so the
//! farmer still gets a figure, marked as an estimate.

use api::models::YieldRequest;
use dioxus::prelude::*;

use super::common::{thousands, LoadingPanel};
use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::context::use_app_context;
use crate::icons::{FaArrowLeft, FaChartLine, FaLeaf, FaSun, FaTriangleExclamation};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Typical kg/acre by crop.
pub fn base_yield(crop: &str) -> f64 {
    match crop {
        "Wheat" => 4500.0,
        "Rice" => 5500.0,
        "Cotton" => 1600.0,
        "Maize" => 5000.0,
        "Sugarcane" => 70000.0,
        "Soybean" => 2200.0,
        "Pulses" => 1800.0,
        _ => 4000.0,
    }
}

pub fn soil_factor(quality: &str) -> f64 {
    match quality {
        "Good" => 1.1,
        "Poor" => 0.85,
        _ => 1.0,
    }
}

/// Offline estimate in kg/acre, rounded.
pub fn local_estimate(request: &YieldRequest) -> f64 {
    (base_yield(&request.crop) * soil_factor(&request.soil_quality)).round()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_yield(per_acre: f64) -> Self {
        if per_acre > 4500.0 {
            RiskLevel::Low
        } else if per_acre > 3500.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "text-green",
            RiskLevel::Medium => "text-yellow",
            RiskLevel::High => "text-red",
        }
    }
}

pub fn total_yield(per_acre: f64, acres: f64) -> f64 {
    (per_acre * acres).round()
}

#[derive(Clone, Debug, PartialEq)]
struct Outcome {
    per_acre: f64,
    unit: String,
    /// `None` for the offline estimate.
    confidence: Option<f64>,
}

const FERTILIZER: [(&str, &str, &str); 3] = [
    ("Nitrogen (N)", "120-150 kg/acre", "Apply at tillering and flowering stages"),
    ("Phosphorus (P)", "60-80 kg/acre", "Apply as basal dose at sowing"),
    ("Potassium (K)", "40-60 kg/acre", "Apply at panicle initiation"),
];

const IMPROVEMENTS: [(&str, &str); 4] = [
    (
        "Optimize Fertilizer Application",
        "Use soil testing to determine exact nutrient requirements. Apply fertilizers in split doses for better absorption and reduced wastage.",
    ),
    (
        "Implement Precision Irrigation",
        "Monitor soil moisture levels regularly. Adjust irrigation schedule based on crop growth stage and weather conditions for optimal water use.",
    ),
    (
        "Pest and Disease Management",
        "Conduct weekly field inspections. Use integrated pest management strategies and apply pesticides only when threshold levels are reached.",
    ),
    (
        "Soil Health Improvement",
        "Add organic matter through compost or green manure. Practice crop rotation to maintain soil fertility and reduce pest build-up.",
    ),
];

#[component]
pub fn YieldResultsView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let context = use_app_context();
    let draft = use_signal(|| context.store.load_yield_draft::<YieldRequest>());

    use_effect(move || {
        if draft.read().is_none() {
            on_navigate.call("/yield".to_string());
        }
    });

    let outcome = use_resource(move || async move {
        let request = draft()?;
        let outcome = match auth.client().predict_yield(&request).await {
            Ok(prediction) => Outcome {
                per_acre: prediction.predicted_yield.round(),
                unit: prediction.unit,
                confidence: Some(prediction.confidence),
            },
            Err(e) => {
                if auth.check(&e) {
                    return None;
                }
                tracing::warn!("yield model unavailable, using local estimate: {e}");
                Outcome {
                    per_acre: local_estimate(&request),
                    unit: "kg/acre".to_string(),
                    confidence: None,
                }
            }
        };
        Some(outcome)
    });

    let Some(request) = draft() else {
        return rsx! {};
    };
    let Some(Some(result)) = outcome() else {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            LoadingPanel { label: "Running the yield model..." }
        };
    };

    let acres = request.acres();
    let total = total_yield(result.per_acre, acres);
    let risk = RiskLevel::for_yield(result.per_acre);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            div { class: "page-header",
                div {
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_navigate.call("/yield".to_string()),
                        Icon { icon: FaArrowLeft, width: 12, height: 12 }
                        " Back to Form"
                    }
                    h1 { "Yield Prediction Results" }
                    p { class: "muted", "AI-generated analysis for {request.crop} cultivation in {request.district}" }
                }
            }

            Card { class: "highlight-card",
                CardContent {
                    div { class: "result-hero",
                        span { class: "hero-icon", Icon { icon: FaChartLine, width: 36, height: 36 } }
                        h2 { "Predicted Yield" }
                        div { class: "result-figure", "{thousands(result.per_acre)}" }
                        p { class: "muted", "{result.unit}" }
                        {match result.confidence {
                            Some(confidence) => rsx! { p { class: "small muted", "Model confidence: {confidence}%" } },
                            None => rsx! { p { class: "small text-yellow", "Estimated offline from regional averages" } },
                        }}
                        div { class: "result-split",
                            div {
                                p { class: "muted", "Total Land" }
                                p { class: "result-sub", "{acres} acres" }
                            }
                            div {
                                p { class: "muted", "Total Expected Yield" }
                                p { class: "result-sub", "{thousands(total)} kg" }
                            }
                        }
                    }
                }
            }

            div { class: "grid-3",
                Card {
                    CardHeader {
                        CardTitle {
                            span { class: "{risk.color_class()}", Icon { icon: FaTriangleExclamation, width: 16, height: 16 } }
                            " Risk Analysis"
                        }
                    }
                    CardContent {
                        p { class: "muted", "Risk Level" }
                        p { class: "result-sub {risk.color_class()}", "{risk.as_str()}" }
                    }
                }
                Card {
                    CardHeader { CardTitle { Icon { icon: FaLeaf, width: 16, height: 16 } " Soil Quality" } }
                    CardContent {
                        p { class: "result-sub", "{request.soil_quality}" }
                        p { class: "muted small", "Factor applied to the regional baseline: ×{soil_factor(&request.soil_quality)}" }
                    }
                }
                Card {
                    CardHeader { CardTitle { Icon { icon: FaSun, width: 16, height: 16 } " Climate" } }
                    CardContent {
                        p { class: "muted small", "Average rainfall: {request.avg_rainfall} mm" }
                        p { class: "muted small", "Average temperature: {request.avg_temperature} °C" }
                        p { class: "muted small", "Season year: {request.year}" }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Fertilizer Recommendations" } }
                CardContent {
                    div { class: "grid-3",
                        for (nutrient, rate, timing) in FERTILIZER {
                            div { key: "{nutrient}", class: "tile",
                                p { class: "muted", "{nutrient}" }
                                p { class: "result-sub", "{rate}" }
                                p { class: "muted small", "{timing}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Improvement Plan" } }
                CardContent {
                    ol { class: "steps",
                        for (title, detail) in IMPROVEMENTS {
                            li { key: "{title}",
                                h4 { "{title}" }
                                p { class: "muted small", "{detail}" }
                            }
                        }
                    }
                }
            }

            div { class: "row-center",
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_navigate.call("/yield".to_string()),
                    "New Prediction"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(crop: &str, soil: &str, land: &str) -> YieldRequest {
        YieldRequest {
            district: "Multan".to_string(),
            year: "2025".to_string(),
            crop: crop.to_string(),
            soil_quality: soil.to_string(),
            avg_rainfall: "600".to_string(),
            avg_temperature: "28".to_string(),
            land_size: land.to_string(),
        }
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(RiskLevel::for_yield(4501.0), RiskLevel::Low);
        assert_eq!(RiskLevel::for_yield(4500.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_yield(3501.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_yield(3500.0), RiskLevel::High);
        assert_eq!(RiskLevel::High.color_class(), "text-red");
    }

    #[test]
    fn local_estimate_uses_crop_and_soil() {
        assert_eq!(local_estimate(&request("Wheat", "Good", "1")), 4950.0);
        assert_eq!(local_estimate(&request("Cotton", "Poor", "1")), 1360.0);
        assert_eq!(local_estimate(&request("Barley", "Moderate", "1")), 4000.0);
    }

    #[test]
    fn total_scales_with_land() {
        let req = request("Rice", "Moderate", "2.5");
        assert_eq!(total_yield(local_estimate(&req), req.acres()), 13750.0);

        let req = request("Rice", "Moderate", "not a number");
        assert_eq!(total_yield(5500.0, req.acres()), 5500.0);
    }
}

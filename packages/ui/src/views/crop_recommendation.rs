use api::models::{CropRecommendation, CropRecommendationRequest};
use dioxus::prelude::*;

use super::common::PageHeader;
use super::yield_form::DISTRICTS;
use crate::auth::use_auth;
use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
    Select,
};
use crate::icons::{FaArrowsRotate, FaCircleCheck, FaLightbulb, FaSeedling};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// District names whose backend code is not simply the lowercased name.
const DISTRICT_CODES: &[(&str, &str)] = &[
    ("Bahawalpur", "bwp"),
    ("Bhakkar", "bakar"),
    ("Chakwal", "chakwall"),
    ("Chiniot", "chainiot"),
    ("D.G. Khan", "d.g.khan"),
    ("Islamabad", "isl"),
    ("Jhelum", "jehlum"),
    ("M.B. Din", "m.b.din"),
    ("Muzaffargarh", "muzafargarh"),
    ("Narowal", "narowall"),
    ("Rahim Yar Khan", "ryk"),
    ("Sargodha", "sarjodha"),
    ("Sheikhupura", "shekupora"),
    ("Toba Tek Singh", "tobataiksingh"),
    ("Vehari", "vihari"),
];

pub fn district_code(name: &str) -> String {
    DISTRICT_CODES
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| name.to_lowercase())
}

pub fn district_name(code: &str) -> String {
    DISTRICTS
        .iter()
        .find(|name| district_code(name) == code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Raw text of every field, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoilForm {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
    pub district: String,
}

impl SoilForm {
    /// Parse into a request. Nothing is sent when any field fails.
    pub fn to_request(&self) -> Result<CropRecommendationRequest, String> {
        if self.district.is_empty() {
            return Err("District is required".to_string());
        }
        let num = |value: &str, label: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{label} must be a number"))
        };
        Ok(CropRecommendationRequest {
            nitrogen: num(&self.nitrogen, "Nitrogen")?,
            phosphorus: num(&self.phosphorus, "Phosphorus")?,
            potassium: num(&self.potassium, "Potassium")?,
            temperature: num(&self.temperature, "Temperature")?,
            humidity: num(&self.humidity, "Humidity")?,
            ph: num(&self.ph, "Soil pH")?,
            rainfall: num(&self.rainfall, "Rainfall")?,
            district: self.district.clone(),
        })
    }
}

#[component]
fn NumberField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            Label { html_for: id, "{label}" }
            Input { id, r#type: "number", step: "any", placeholder, value, required: true,
                oninput: move |e: FormEvent| oninput.call(e.value()) }
        }
    }
}

#[component]
pub fn CropRecommendationView() -> Element {
    let auth = use_auth();
    let mut form = use_signal(SoilForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut result = use_signal(|| Option::<CropRecommendation>::None);

    let district_options: Vec<(String, String)> = DISTRICTS
        .iter()
        .map(|name| (district_code(name), name.to_string()))
        .collect();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let request = match form().to_request() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        loading.set(true);
        spawn(async move {
            match auth.client().recommend_crop(&request).await {
                Ok(found) => result.set(Some(found)),
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::warn!("crop recommendation failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
            }
            loading.set(false);
        });
    };

    let current = form();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page page-narrow",
            div { class: "page-hero",
                span { class: "hero-icon", Icon { icon: FaSeedling, width: 32, height: 32 } }
                PageHeader {
                    title: "Smart Crop Recommendation",
                    subtitle: "Get scientific crop suggestions based on your soil nutrients, weather, and region",
                }
            }

            if let Some(found) = result() {
                Card { class: "result-card",
                    CardContent {
                        p { class: "muted small", "Recommended crop" }
                        h2 { class: "result-value", "{found.recommended_crop}" }
                        div { class: "progress",
                            div { class: "progress-fill", style: "width: {found.confidence.clamp(0.0, 100.0)}%" }
                        }
                        p { class: "small", "{found.confidence}% Confidence" }
                        div { class: "grid-4",
                            div { class: "tile",
                                p { class: "muted small", "District" }
                                p { "{district_name(&current.district)}" }
                            }
                            div { class: "tile",
                                p { class: "muted small", "Soil pH" }
                                p { "{current.ph}" }
                            }
                            div { class: "tile",
                                p { class: "muted small", "Nutrients (N-P-K)" }
                                p { "{current.nitrogen}-{current.phosphorus}-{current.potassium}" }
                            }
                            div { class: "tile",
                                p { class: "muted small", "Environment" }
                                p { "{current.temperature}°C / {current.humidity}%" }
                            }
                        }
                    }
                }
                Card { class: "info-card",
                    CardContent {
                        h4 { Icon { icon: FaLightbulb, width: 14, height: 14 } " Why {found.recommended_crop}?" }
                        p { class: "muted small",
                            "Based on the soil pH of {current.ph} and the nutrient levels you entered, your soil suits {found.recommended_crop}. "
                            "The rainfall level of {current.rainfall}mm also aligns with the water requirements for this crop in {district_name(&current.district)}."
                        }
                    }
                }
                div { class: "row-center",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| result.set(None),
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Try Another"
                    }
                }
            } else {
                Card {
                    CardHeader {
                        CardTitle { "Soil & Environmental Analysis" }
                        CardDescription { "Enter the values from your latest soil test and local weather" }
                    }
                    CardContent {
                        form { class: "form-stack", onsubmit,
                            div { class: "field",
                                Label { html_for: "district", "District" }
                                Select { id: "district", value: current.district.clone(), options: district_options,
                                    placeholder: "Select District", required: true,
                                    onchange: move |v: String| form.write().district = v }
                            }
                            div { class: "field-row",
                                NumberField { id: "N", label: "Nitrogen (N)", placeholder: "e.g., 90", value: current.nitrogen.clone(),
                                    oninput: move |v| form.write().nitrogen = v }
                                NumberField { id: "P", label: "Phosphorus (P)", placeholder: "e.g., 42", value: current.phosphorus.clone(),
                                    oninput: move |v| form.write().phosphorus = v }
                                NumberField { id: "K", label: "Potassium (K)", placeholder: "e.g., 43", value: current.potassium.clone(),
                                    oninput: move |v| form.write().potassium = v }
                            }
                            div { class: "field-row",
                                NumberField { id: "temperature", label: "Temperature (°C)", placeholder: "e.g., 25.5", value: current.temperature.clone(),
                                    oninput: move |v| form.write().temperature = v }
                                NumberField { id: "humidity", label: "Humidity (%)", placeholder: "e.g., 80", value: current.humidity.clone(),
                                    oninput: move |v| form.write().humidity = v }
                            }
                            div { class: "field-row",
                                NumberField { id: "ph", label: "Soil pH", placeholder: "e.g., 6.5", value: current.ph.clone(),
                                    oninput: move |v| form.write().ph = v }
                                NumberField { id: "rainfall", label: "Rainfall (mm)", placeholder: "e.g., 200", value: current.rainfall.clone(),
                                    oninput: move |v| form.write().rainfall = v }
                            }
                            if let Some(message) = error() {
                                p { class: "form-error", "{message}" }
                            }
                            Button { r#type: "submit", class: "btn-block", disabled: loading(),
                                if loading() {
                                    "Analyzing..."
                                } else {
                                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                                    " Get Recommendation"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

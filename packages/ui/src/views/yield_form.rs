use api::models::YieldRequest;
use dioxus::prelude::*;

use super::common::PageHeader;
use super::options;
use crate::components::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Select,
};
use crate::context::use_app_context;
use crate::icons::{FaChartLine, FaDroplet, FaLeaf, FaLocationDot, FaSeedling};
use crate::{platform, Icon};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Punjab districts known to the yield model.
pub const DISTRICTS: &[&str] = &[
    "Attock", "Bahawalnagar", "Bahawalpur", "Bhakkar", "Chakwal", "Chiniot", "D.G. Khan",
    "Faisalabad", "Gujranwala", "Gujrat", "Hafizabad", "Jhang", "Jhelum", "Kasur", "Khanewal",
    "Khushab", "Lahore", "Layyah", "Lodhran", "M.B. Din", "Mianwali", "Multan", "Muzaffargarh",
    "Nankana Sahib", "Narowal", "Okara", "Pakpattan", "Rahim Yar Khan", "Rajanpur", "Rawalpindi",
    "Sahiwal", "Sargodha", "Sheikhupura", "Sialkot", "Toba Tek Singh", "Vehari",
];

pub const YIELD_CROPS: &[&str] = &["Cotton", "Maize", "Rice", "Sugarcane", "Wheat"];
pub const SOIL_QUALITIES: &[&str] = &["Good", "Moderate", "Poor"];

pub const YIELD_RESULTS_PATH: &str = "/yield/results";

/// Draft to start from: the saved one if any, else an empty form for this year.
fn initial_draft(saved: Option<YieldRequest>, year: i32) -> YieldRequest {
    saved.unwrap_or_else(|| YieldRequest {
        year: year.to_string(),
        ..Default::default()
    })
}

#[component]
pub fn YieldFormView(on_navigate: EventHandler<String>) -> Element {
    let context = use_app_context();
    let store = context.store.clone();
    let mut form = use_signal(|| initial_draft(context.store.load_yield_draft(), platform::current_year()));
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form();
        if let Err(message) = draft.validate() {
            error.set(Some(message));
            return;
        }
        match store.save_yield_draft(&draft) {
            Ok(()) => on_navigate.call(YIELD_RESULTS_PATH.to_string()),
            Err(e) => {
                tracing::error!("could not save yield draft: {e}");
                error.set(Some("Could not save the form. Please try again.".to_string()));
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page page-narrow",
            div { class: "page-hero",
                span { class: "hero-icon", Icon { icon: FaChartLine, width: 32, height: 32 } }
                PageHeader {
                    title: "AI Yield Prediction",
                    subtitle: "Enter your farm details to get accurate yield predictions and recommendations",
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Farm & Crop Details" }
                    CardDescription { "Provide accurate information for better predictions" }
                }
                CardContent {
                    form { class: "form-stack", onsubmit,
                        if let Some(message) = error() {
                            p { class: "form-error", "{message}" }
                        }

                        h4 { class: "section-title",
                            Icon { icon: FaLocationDot, width: 16, height: 16 }
                            " Location & Timeline"
                        }
                        div { class: "field-row",
                            div { class: "field",
                                Label { html_for: "District", "District *" }
                                Select { id: "District", value: form().district, options: options(DISTRICTS),
                                    placeholder: "Select District", required: true,
                                    onchange: move |v: String| form.write().district = v }
                            }
                            div { class: "field",
                                Label { html_for: "Year", "Year *" }
                                Input { id: "Year", r#type: "number", placeholder: "e.g., 2024", value: form().year,
                                    required: true, oninput: move |e: FormEvent| form.write().year = e.value() }
                            }
                        }

                        h4 { class: "section-title",
                            Icon { icon: FaSeedling, width: 16, height: 16 }
                            " Crop & Soil Quality"
                        }
                        div { class: "field-row",
                            div { class: "field",
                                Label { html_for: "Crop", "Crop *" }
                                Select { id: "Crop", value: form().crop, options: options(YIELD_CROPS),
                                    placeholder: "Select Crop", required: true,
                                    onchange: move |v: String| form.write().crop = v }
                            }
                            div { class: "field",
                                Label { html_for: "soil_quality", "Soil Quality *" }
                                Select { id: "soil_quality", value: form().soil_quality, options: options(SOIL_QUALITIES),
                                    placeholder: "Select Quality", required: true,
                                    onchange: move |v: String| form.write().soil_quality = v }
                            }
                        }

                        h4 { class: "section-title",
                            Icon { icon: FaDroplet, width: 16, height: 16 }
                            " Environment"
                        }
                        div { class: "field-row",
                            div { class: "field",
                                Label { html_for: "avg_rainfall", "Average Rainfall (mm) *" }
                                Input { id: "avg_rainfall", r#type: "number", step: "0.01", placeholder: "e.g., 600.5",
                                    value: form().avg_rainfall, required: true,
                                    oninput: move |e: FormEvent| form.write().avg_rainfall = e.value() }
                            }
                            div { class: "field",
                                Label { html_for: "avg_temperature", "Average Temperature (°C) *" }
                                Input { id: "avg_temperature", r#type: "number", step: "0.01", placeholder: "e.g., 28.5",
                                    value: form().avg_temperature, required: true,
                                    oninput: move |e: FormEvent| form.write().avg_temperature = e.value() }
                            }
                        }
                        div { class: "field",
                            Label { html_for: "land_size", "Land Size (acres)" }
                            Input { id: "land_size", r#type: "number", step: "0.1", value: form().land_size,
                                oninput: move |e: FormEvent| form.write().land_size = e.value() }
                        }

                        div { class: "row-center",
                            Button { r#type: "submit",
                                Icon { icon: FaChartLine, width: 14, height: 14 }
                                " Generate Prediction"
                            }
                        }
                    }
                }
            }

            Card { class: "info-card",
                CardContent {
                    div { class: "row",
                        Icon { icon: FaLeaf, width: 20, height: 20 }
                        div {
                            h4 { "How it works" }
                            p { class: "muted small",
                                "Our AI model analyzes your district, crop, soil quality and climate conditions "
                                "to estimate the yield per acre. The draft is kept on this device until you submit a new one."
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
    fn fresh_form_defaults_to_this_year() {
        let draft = initial_draft(None, 2026);
        assert_eq!(draft.year, "2026");
        assert_eq!(draft.land_size, "1");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn saved_draft_is_resumed() {
        let saved = YieldRequest {
            district: "Multan".to_string(),
            year: "2024".to_string(),
            ..Default::default()
        };
        assert_eq!(initial_draft(Some(saved.clone()), 2026), saved);
    }

    #[test]
    fn district_list_is_sorted_and_unique() {
        let mut sorted = DISTRICTS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, DISTRICTS);
    }
}

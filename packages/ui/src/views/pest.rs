use api::models::PestDetection;
use dioxus::prelude::*;

use super::common::PageHeader;
use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ToastOptions,
};
use crate::icons::{FaBug, FaCamera, FaCircleCheck, FaShieldHalved, FaUpload};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const TIPS: &[&str] = &[
    "Take photos in good natural lighting",
    "Focus on affected areas (leaves, stems, fruits)",
    "Capture clear, close-up images",
    "Upload multiple images from different angles for better accuracy",
    "Ensure images are not blurry or overexposed",
];

#[derive(Clone, Debug, PartialEq)]
struct Upload {
    name: String,
    bytes: Vec<u8>,
}

pub fn pest_severity_class(severity: &str) -> &'static str {
    match severity {
        "Low" => "tone-green",
        "Medium" => "tone-yellow",
        "High" => "tone-red",
        _ => "tone-gray",
    }
}

fn size_label(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{} KB", bytes.div_ceil(1024))
    }
}

#[component]
fn DetectionResult(result: PestDetection) -> Element {
    rsx! {
        Card { class: "result-card",
            CardContent {
                if result.detected {
                    div { class: "grid-3",
                        div {
                            p { class: "muted small", "Pest/Disease Detected" }
                            h3 { "{result.pest_name}" }
                        }
                        div {
                            p { class: "muted small", "Severity Level" }
                            span { class: "pill {pest_severity_class(&result.severity)}", "{result.severity}" }
                        }
                        div {
                            p { class: "muted small", "Confidence Level" }
                            div { class: "progress",
                                div { class: "progress-fill", style: "width: {result.confidence.clamp(0.0, 100.0)}%" }
                            }
                            span { "{result.confidence}%" }
                        }
                    }
                } else {
                    div { class: "row",
                        Icon { icon: FaCircleCheck, width: 20, height: 20 }
                        h3 { "No pests or diseases detected" }
                    }
                }
            }
        }
        if !result.recommendations.is_empty() {
            Card {
                CardHeader { CardTitle { "Treatment Recommendations" } }
                CardContent {
                    ol { class: "steps",
                        for (i, rec) in result.recommendations.iter().enumerate() {
                            li { key: "{i}", "{rec}" }
                        }
                    }
                }
            }
        }
        if !result.preventive_measures.is_empty() {
            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        " Preventive Measures"
                    }
                }
                CardContent {
                    ul { class: "check-list",
                        for (i, measure) in result.preventive_measures.iter().enumerate() {
                            li { key: "{i}",
                                Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                " {measure}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PestDetectionView() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut upload = use_signal(|| Option::<Upload>::None);
    let mut analyzing = use_signal(|| false);
    let mut result = use_signal(|| Option::<PestDetection>::None);

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                upload.set(Some(Upload { name, bytes: bytes.to_vec() }));
                result.set(None);
            }
            Err(e) => {
                tracing::warn!("could not read {name}: {e}");
                toast.error("Could not read the selected image", ToastOptions::new());
            }
        }
    };

    let analyze = move |_| {
        let Some(current) = upload() else {
            return;
        };
        analyzing.set(true);
        spawn(async move {
            match auth.client().detect_pest(&current.name, current.bytes).await {
                Ok(found) => result.set(Some(found)),
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("pest detection failed: {e}");
                        toast.error(e.user_message(), ToastOptions::new().description("Pest detection failed"));
                    }
                }
            }
            analyzing.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page page-narrow",
            div { class: "page-hero",
                span { class: "hero-icon", Icon { icon: FaBug, width: 32, height: 32 } }
                PageHeader {
                    title: "Pest & Disease Detection",
                    subtitle: "Upload a photo of your crop to identify pests and diseases",
                }
            }

            Card {
                CardHeader { CardTitle { "Upload Crop Image" } }
                CardContent {
                    {match upload() {
                        None => rsx! {
                            label { class: "drop-zone", r#for: "pest-image",
                                Icon { icon: FaCamera, width: 32, height: 32 }
                                h4 { "Upload Image" }
                                p { class: "muted small", "Click to browse. JPG or PNG." }
                                span { class: "btn btn-outline",
                                    Icon { icon: FaUpload, width: 14, height: 14 }
                                    " Choose Image"
                                }
                            }
                        },
                        Some(file) => rsx! {
                            div { class: "drop-zone drop-zone-filled",
                                Icon { icon: FaCircleCheck, width: 24, height: 24 }
                                p { "{file.name}" }
                                p { class: "muted small", "{size_label(file.bytes.len())}" }
                                div { class: "row-center",
                                    Button { disabled: analyzing(), onclick: analyze,
                                        if analyzing() { "Analyzing..." } else { "Analyze Image" }
                                    }
                                    Button { variant: ButtonVariant::Outline,
                                        onclick: move |_| {
                                            upload.set(None);
                                            result.set(None);
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        },
                    }}
                    input { id: "pest-image", class: "hidden", r#type: "file", accept: "image/*", onchange: on_file }
                }
            }

            if let Some(found) = result() {
                DetectionResult { result: found }
            }

            Card { class: "info-card",
                CardContent {
                    h4 { "Tips for Better Detection" }
                    ul { class: "muted small",
                        for tip in TIPS {
                            li { key: "{tip}", "{tip}" }
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
    fn severity_tones() {
        assert_eq!(pest_severity_class("High"), "tone-red");
        assert_eq!(pest_severity_class("Low"), "tone-green");
        assert_eq!(pest_severity_class("unknown"), "tone-gray");
    }

    #[test]
    fn upload_sizes() {
        assert_eq!(size_label(500), "1 KB");
        assert_eq!(size_label(2048), "2 KB");
        assert_eq!(size_label(3 * 1024 * 1024), "3.0 MB");
    }
}

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, ModalOverlay,
};
use crate::icons::{FaCalendar, FaChartLine, FaCircleCheck, FaComments, FaLeaf, FaMagnifyingGlass};
use crate::Icon;

use super::common::{EmptyState, PageHeader};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advisory {
    pub crop: &'static str,
    pub season: &'static str,
    pub recommendations: &'static [&'static str],
    pub expected_yield: &'static str,
}

pub const ADVISORIES: &[Advisory] = &[
    Advisory {
        crop: "Wheat",
        season: "Rabi",
        recommendations: &[
            "Apply nitrogen fertilizer at tillering stage",
            "Ensure proper irrigation every 15-20 days",
            "Monitor for rust diseases",
        ],
        expected_yield: "4500-5000 kg/acre",
    },
    Advisory {
        crop: "Rice",
        season: "Kharif",
        recommendations: &[
            "Maintain water level 2-3 inches above soil",
            "Apply potash at panicle initiation",
            "Control weeds in first 30 days",
        ],
        expected_yield: "5500-6000 kg/acre",
    },
    Advisory {
        crop: "Cotton",
        season: "Kharif",
        recommendations: &[
            "Deep plowing before sowing",
            "Apply balanced NPK fertilizer",
            "Regular monitoring for bollworm",
        ],
        expected_yield: "1500-1800 kg/acre",
    },
];

const STAGES: [(&str, &str); 4] = [
    ("Sowing Stage (0-15 days)", "Prepare seedbed properly, ensure proper seed depth, and maintain adequate moisture."),
    ("Vegetative Stage (15-45 days)", "Apply first dose of nitrogen, control weeds, and ensure regular irrigation."),
    ("Flowering Stage (45-75 days)", "Apply remaining fertilizer, monitor for pests, and maintain optimal water levels."),
    ("Maturity Stage (75+ days)", "Reduce irrigation, monitor crop maturity, and plan harvesting operations."),
];

/// Case-insensitive match on crop or season. An empty term keeps everything.
pub fn filter_advisories(term: &str) -> Vec<Advisory> {
    let term = term.trim().to_lowercase();
    ADVISORIES
        .iter()
        .filter(|a| a.crop.to_lowercase().contains(&term) || a.season.to_lowercase().contains(&term))
        .copied()
        .collect()
}

#[component]
fn AdvisoryDetail(advisory: Advisory, on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    // Current-stage advice from the backend, when it has any for this crop
    let stage_tip = use_resource(move || async move {
        match auth.client().crop_advisory(advisory.crop).await {
            Ok(tip) if !tip.recommendation.is_empty() => Some(tip),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("no stage advice for {}: {e}", advisory.crop);
                None
            }
        }
    });

    rsx! {
        ModalOverlay { title: "{advisory.crop} Cultivation Guide", on_close,
            div { class: "modal-body form-stack",
                p { class: "muted", "{advisory.season} Season" }
                div { class: "tile tone-green",
                    h4 { Icon { icon: FaChartLine, width: 14, height: 14 } " Expected Yield" }
                    p { class: "result-sub", "{advisory.expected_yield}" }
                }
                if let Some(Some(tip)) = stage_tip() {
                    div { class: "tile tone-blue",
                        h4 { "Current stage: {tip.stage}" }
                        p { "{tip.recommendation}" }
                        if !tip.fertilizer.is_empty() {
                            p { class: "small", "Fertilizer: {tip.fertilizer}" }
                        }
                        if !tip.pest_management.is_empty() {
                            p { class: "small", "Pest management: {tip.pest_management}" }
                        }
                    }
                }
                h4 { Icon { icon: FaComments, width: 14, height: 14 } " Expert Recommendations" }
                ol { class: "steps",
                    for rec in advisory.recommendations.iter() {
                        li { key: "{rec}", "{rec}" }
                    }
                }
                h4 { "Growth Stages & Care" }
                div { class: "grid-2",
                    for (stage, care) in STAGES {
                        div { key: "{stage}", class: "tile",
                            h4 { "{stage}" }
                            p { class: "muted small", "{care}" }
                        }
                    }
                }
                div { class: "row-end",
                    Button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}

#[component]
pub fn AdvisoryView() -> Element {
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Advisory>::None);
    let visible = filter_advisories(&search());

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Crop Advisory", subtitle: "Get expert recommendations for different crops and seasons" }

            Card {
                CardContent {
                    div { class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        Input {
                            placeholder: "Search by crop name or season...",
                            value: search(),
                            oninput: move |e: FormEvent| search.set(e.value()),
                        }
                    }
                }
            }

            if visible.is_empty() {
                EmptyState { message: "No advisories match your search." }
            }
            div { class: "card-grid",
                for advisory in visible {
                    Card { key: "{advisory.crop}", class: "clickable", onclick: move |_| selected.set(Some(advisory)),
                        CardHeader {
                            div { class: "row",
                                span { class: "stat-icon tone-green", Icon { icon: FaLeaf, width: 16, height: 16 } }
                                div {
                                    CardTitle { "{advisory.crop}" }
                                    p { class: "muted small",
                                        Icon { icon: FaCalendar, width: 10, height: 10 }
                                        " {advisory.season} Season"
                                    }
                                }
                            }
                        }
                        CardContent {
                            p { class: "small", "Key Recommendations:" }
                            ul { class: "check-list",
                                for rec in advisory.recommendations.iter().take(2) {
                                    li { key: "{rec}",
                                        Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                        " {rec}"
                                    }
                                }
                            }
                            p { class: "small",
                                span { class: "muted", "Expected Yield: " }
                                span { "{advisory.expected_yield}" }
                            }
                            Button { variant: ButtonVariant::Outline, "View Details" }
                        }
                    }
                }
            }

            Card { class: "info-card",
                CardContent {
                    h4 { Icon { icon: FaComments, width: 14, height: 14 } " General Advisory" }
                    p { class: "muted small",
                        "Always conduct soil testing before sowing. Choose certified seeds from reliable sources. "
                        "Follow integrated pest management practices. Maintain proper farm records for better decision making. "
                        "Consult with local agricultural extension officers for region-specific advice."
                    }
                }
            }
        }

        if let Some(advisory) = selected() {
            AdvisoryDetail { advisory, on_close: move |_| selected.set(None) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_shows_all() {
        assert_eq!(filter_advisories("").len(), 3);
        assert_eq!(filter_advisories("   ").len(), 3);
    }

    #[test]
    fn search_matches_crop_or_season() {
        let crops: Vec<_> = filter_advisories("kharif").iter().map(|a| a.crop).collect();
        assert_eq!(crops, ["Rice", "Cotton"]);
        assert_eq!(filter_advisories("WHE")[0].crop, "Wheat");
        assert!(filter_advisories("banana").is_empty());
    }
}

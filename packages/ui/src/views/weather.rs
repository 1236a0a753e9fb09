use api::models::{WeatherAlert, WeatherReport};
use dioxus::prelude::*;

use super::common::{severity_class, PageHeader};
use crate::auth::use_auth;
use crate::components::{Button, Card, CardContent, CardHeader, CardTitle, Input};
use crate::context::use_config;
use crate::icons::{
    FaCircleCheck, FaCircleXmark, FaCloud, FaCloudRain, FaCloudSunRain, FaDroplet, FaSun,
    FaTriangleExclamation, FaWind,
};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sky {
    Sunny,
    Cloudy,
    Rain,
    Drizzle,
}

impl Sky {
    pub fn from_condition(condition: &str) -> Self {
        match condition.trim().to_lowercase().as_str() {
            "" | "cloudy" | "partly cloudy" => Sky::Cloudy,
            "sunny" => Sky::Sunny,
            "rain" | "rainy" => Sky::Rain,
            _ => Sky::Drizzle,
        }
    }
}

#[component]
fn SkyIcon(condition: String, #[props(default = 32)] size: u32) -> Element {
    match Sky::from_condition(&condition) {
        Sky::Sunny => rsx! { Icon { class: "text-yellow", icon: FaSun, width: size, height: size } },
        Sky::Cloudy => rsx! { Icon { class: "muted", icon: FaCloud, width: size, height: size } },
        Sky::Rain => rsx! { Icon { class: "text-blue", icon: FaCloudRain, width: size, height: size } },
        Sky::Drizzle => rsx! { Icon { class: "text-blue", icon: FaCloudSunRain, width: size, height: size } },
    }
}

/// What a fetch outcome does to the snapshot on screen: a failure keeps
/// whatever was shown before.
pub fn next_snapshot(
    previous: Option<WeatherReport>,
    fetched: Result<WeatherReport, api::ApiError>,
) -> Option<WeatherReport> {
    match fetched {
        Ok(report) => Some(report),
        Err(_) => previous,
    }
}

/// Caption under the temperature. With no snapshot yet, an idle page means
/// the first fetch failed.
pub fn condition_label(report: Option<&WeatherReport>, loading: bool) -> String {
    match report {
        Some(report) => report.current.condition.clone(),
        None if loading => "Loading...".to_string(),
        None => "Unavailable".to_string(),
    }
}

#[component]
fn AlertRow(alert: WeatherAlert) -> Element {
    rsx! {
        div { class: "alert-row {severity_class(alert.severity)}",
            Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
            div {
                div { class: "row-between",
                    h4 { class: "small", "{alert.title}" }
                    span { class: "muted small", "{alert.time}" }
                }
                p { class: "small", "{alert.message}" }
            }
        }
    }
}

#[component]
pub fn WeatherView() -> Element {
    let auth = use_auth();
    let config = use_config();
    let default_location = config.weather.default_location.clone();
    let mut query = use_signal(|| default_location.clone());
    let mut location = use_signal(|| default_location.clone());
    let mut report = use_signal(|| Option::<WeatherReport>::None);
    let mut loading = use_signal(|| false);

    let mut fetch = move |city: String| {
        loading.set(true);
        spawn(async move {
            let fetched = auth.client().weather_all(&city).await;
            match &fetched {
                Ok(_) => location.set(city.clone()),
                Err(e) => {
                    if !auth.check(e) {
                        tracing::warn!("weather for {city} unavailable: {e}");
                    }
                }
            }
            let previous = report.peek().clone();
            report.set(next_snapshot(previous, fetched));
            loading.set(false);
        });
    };

    use_hook(move || fetch(default_location));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let city = query().trim().to_string();
        if !city.is_empty() {
            fetch(city);
        }
    };

    let data = report().unwrap_or_default();
    let current = data.current.clone();
    let condition = condition_label(report().as_ref(), loading());
    let advisories = data.advisories.clone();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Weather & Alerts", subtitle: "Real-time weather updates for {location}",
                form { class: "row", onsubmit,
                    Input { placeholder: "Search city...", value: query(), oninput: move |e: FormEvent| query.set(e.value()) }
                    Button { r#type: "submit", disabled: loading(),
                        if loading() { "..." } else { "Search" }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Current Weather" } }
                CardContent {
                    div { class: "grid-4",
                        div { class: "row",
                            SkyIcon { condition: current.condition.clone(), size: 56 }
                            div {
                                h2 { class: "result-value", "{current.temp}°C" }
                                p { class: "muted", "{condition}" }
                            }
                        }
                        div { class: "tile",
                            p { class: "muted small", Icon { icon: FaDroplet, width: 12, height: 12 } " Humidity" }
                            p { class: "stat-value", "{current.humidity}%" }
                        }
                        div { class: "tile",
                            p { class: "muted small", Icon { icon: FaWind, width: 12, height: 12 } " Wind Speed" }
                            p { class: "stat-value", "{current.wind_speed} km/h" }
                        }
                        div { class: "tile",
                            p { class: "muted small", Icon { icon: FaCloudRain, width: 12, height: 12 } " Rain chance today" }
                            p { class: "stat-value",
                                {data.forecast.first().map(|d| format!("{}%", d.rain)).unwrap_or_else(|| "--".to_string())}
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "5-Day Forecast" } }
                CardContent {
                    div { class: "forecast",
                        for (i, day) in data.forecast.iter().enumerate() {
                            div { key: "{i}", class: "tile forecast-day",
                                p { "{day.day}" }
                                SkyIcon { condition: day.condition.clone() }
                                p { class: "stat-value", "{day.temp}°C" }
                                p { class: "muted small", "{day.condition}" }
                                p { class: "small text-blue", Icon { icon: FaDroplet, width: 10, height: 10 } " {day.rain}%" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Weather Alerts" } }
                CardContent {
                    if advisories.alerts.is_empty() {
                        p { class: "muted", "No alerts for this location." }
                    }
                    for alert in advisories.alerts.iter().cloned() {
                        AlertRow { key: "{alert.id}", alert }
                    }
                }
            }

            div { class: "grid-2",
                Card {
                    CardHeader { CardTitle { "Irrigation Recommendations" } }
                    CardContent {
                        {match &advisories.irrigation {
                            Some(irrigation) => rsx! {
                                div { class: "tile tone-blue",
                                    h4 { class: "small", "{irrigation.status}" }
                                    p { class: "small", "{irrigation.message}" }
                                }
                                div { class: "tile",
                                    h4 { class: "small", "Next Irrigation" }
                                    p { class: "stat-value", "{irrigation.next_date}" }
                                    p { class: "muted small", "Based on weather forecast" }
                                }
                            },
                            None => rsx! { p { class: "muted", "No irrigation advice available." } },
                        }}
                    }
                }
                Card {
                    CardHeader { CardTitle { "Farm Activities" } }
                    CardContent {
                        div { class: "tile tone-green",
                            h4 { class: "small", "Recommended" }
                            if advisories.activities.recommended.is_empty() {
                                p { class: "muted small", "No specific recommendations." }
                            }
                            for item in advisories.activities.recommended.iter() {
                                p { key: "{item}", class: "small",
                                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                    " {item}"
                                }
                            }
                        }
                        div { class: "tile tone-red",
                            h4 { class: "small", "Not Recommended" }
                            if advisories.activities.restricted.is_empty() {
                                p { class: "muted small", "No restrictions." }
                            }
                            for item in advisories.activities.restricted.iter() {
                                p { key: "{item}", class: "small",
                                    Icon { icon: FaCircleXmark, width: 12, height: 12 }
                                    " {item}"
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "info-card",
                CardContent {
                    div { class: "row",
                        Icon { icon: FaCloudRain, width: 20, height: 20 }
                        div {
                            h4 { "Weather Data Source" }
                            p { class: "muted small",
                                "Forecasts are subject to change. For critical farm decisions, please consult "
                                "with local agricultural extension services and meteorological departments."
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
    fn conditions_pick_an_icon() {
        assert_eq!(Sky::from_condition("Sunny"), Sky::Sunny);
        assert_eq!(Sky::from_condition("Partly Cloudy"), Sky::Cloudy);
        assert_eq!(Sky::from_condition(""), Sky::Cloudy);
        assert_eq!(Sky::from_condition("RAIN"), Sky::Rain);
        assert_eq!(Sky::from_condition("Thunderstorm"), Sky::Drizzle);
    }

    #[test]
    fn caption_stops_loading_once_the_first_fetch_fails() {
        assert_eq!(condition_label(None, true), "Loading...");
        assert_eq!(condition_label(None, false), "Unavailable");

        let mut shown = WeatherReport::default();
        shown.current.condition = "Sunny".into();
        assert_eq!(condition_label(Some(&shown), true), "Sunny");
        assert_eq!(condition_label(Some(&shown), false), "Sunny");
    }

    #[test]
    fn failed_fetch_keeps_previous_snapshot() {
        let mut shown = WeatherReport::default();
        shown.current.location = "Multan".into();

        let after = next_snapshot(
            Some(shown.clone()),
            Err(api::ApiError::Invalid("offline".into())),
        );
        assert_eq!(after, Some(shown));

        assert_eq!(next_snapshot(None, Err(api::ApiError::Invalid("offline".into()))), None);
    }

    #[test]
    fn successful_fetch_replaces_snapshot() {
        let mut fresh = WeatherReport::default();
        fresh.current.temp = 31.0;
        let after = next_snapshot(Some(WeatherReport::default()), Ok(fresh.clone()));
        assert_eq!(after, Some(fresh));
    }
}

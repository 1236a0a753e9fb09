//! Plain HTML/CSS charts: horizontal bars and a two-series comparison.
//! No canvas or SVG; widths are percentages of the largest value.

use dioxus::prelude::*;

/// Palette used when the data carries no colour of its own.
pub const PALETTE: [&str; 5] = ["#10b981", "#3b82f6", "#f59e0b", "#8b5cf6", "#6366f1"];

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, index: usize) -> Self {
        Self {
            label: label.into(),
            value,
            color: PALETTE[index % PALETTE.len()].to_string(),
        }
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        if let Some(color) = color.filter(|c| !c.is_empty()) {
            self.color = color;
        }
        self
    }
}

/// Width of `value` relative to `max`, as a percentage clamped to `0..=100`.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Share of each value in the total, in percent, rounded to one decimal.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    values
        .iter()
        .map(|v| {
            if total <= 0.0 {
                0.0
            } else {
                (v.max(0.0) / total * 1000.0).round() / 10.0
            }
        })
        .collect()
}

#[component]
pub fn BarChart(bars: Vec<Bar>, #[props(default)] unit: String) -> Element {
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    rsx! {
        div { class: "bar-chart",
            for bar in bars {
                div { key: "{bar.label}", class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: "width: {bar_percent(bar.value, max)}%; background: {bar.color};",
                        }
                    }
                    span { class: "bar-value", "{bar.value} {unit}" }
                }
            }
        }
    }
}

/// Share breakdown, used where a pie chart would be.
#[component]
pub fn ShareChart(bars: Vec<Bar>) -> Element {
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let percents = shares(&values);

    rsx! {
        div { class: "share-chart",
            div { class: "share-strip",
                for (bar, pct) in bars.iter().zip(percents.iter()) {
                    div {
                        key: "{bar.label}",
                        class: "share-segment",
                        title: "{bar.label}: {bar.value}",
                        style: "width: {pct}%; background: {bar.color};",
                    }
                }
            }
            ul { class: "share-legend",
                for (bar, pct) in bars.iter().zip(percents.iter()) {
                    li { key: "{bar.label}",
                        span { class: "legend-swatch", style: "background: {bar.color};" }
                        "{bar.label} ({pct}%)"
                    }
                }
            }
        }
    }
}

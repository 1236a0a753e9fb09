//! Small helpers shared by several pages.

use api::models::Severity;
use dioxus::prelude::*;

/// Background/text classes for an alert of the given severity.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "tone-red",
        Severity::Medium => "tone-yellow",
        Severity::Low => "tone-blue",
    }
}

/// Round to a whole number and group thousands: `12345.6` -> `"12,346"`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-header",
            div {
                h1 { "{title}" }
                if !subtitle.is_empty() {
                    p { class: "muted", "{subtitle}" }
                }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

#[component]
pub fn LoadingPanel(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading-panel",
            div { class: "spinner" }
            p { class: "muted", "{label}" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", p { class: "muted", "{message}" } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tones() {
        assert_eq!(severity_class(Severity::High), "tone-red");
        assert_eq!(severity_class(Severity::Medium), "tone-yellow");
        assert_eq!(severity_class(Severity::Low), "tone-blue");
    }

    #[test]
    fn grouping() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(4950.0), "4,950");
        assert_eq!(thousands(1234567.0), "1,234,567");
        assert_eq!(thousands(-2500.0), "-2,500");
    }
}

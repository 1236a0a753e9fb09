use dioxus::prelude::*;

use super::common::PageHeader;
use crate::auth::use_auth;
use crate::components::{Button, Card, CardContent, Input};
use crate::icons::{FaArrowsRotate, FaMagnifyingGlass, FaTerminal};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Colour class for a log line, by the first level keyword it contains.
pub fn log_line_class(line: &str) -> &'static str {
    if line.contains("ERROR") || line.contains("Exception") {
        "log-error"
    } else if line.contains("WARNING") {
        "log-warning"
    } else if line.contains("INFO") {
        "log-info"
    } else if line.contains("DEBUG") {
        "log-debug"
    } else {
        "log-plain"
    }
}

#[component]
pub fn LogsView() -> Element {
    let auth = use_auth();
    let mut logs = use_signal(Vec::<String>::new);
    let mut filter = use_signal(String::new);
    let mut loading = use_signal(|| true);

    let mut fetch = move |query: String| {
        loading.set(true);
        spawn(async move {
            match auth.client().system_logs(&query).await {
                Ok(lines) => {
                    if *filter.peek() == query {
                        logs.set(lines);
                    }
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::error!("failed to fetch logs: {e}");
                    }
                }
            }
            loading.set(false);
        });
    };

    use_hook(move || fetch(String::new()));

    let on_search = move |evt: FormEvent| {
        let query = evt.value();
        filter.set(query.clone());
        fetch(query);
    };

    let lines = logs();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "System Activity Logs", subtitle: "Backend events, most recent last",
                Button { disabled: loading(),
                    onclick: move |_| {
                        filter.set(String::new());
                        fetch(String::new());
                    },
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    " Refresh"
                }
            }

            Card {
                CardContent {
                    div { class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        Input { placeholder: "Filter logs (e.g. ERROR, login, user@example.com)...", value: filter(), oninput: on_search }
                    }
                }
            }

            Card { class: "log-card",
                CardContent {
                    div { class: "log-console",
                        if loading() && lines.is_empty() {
                            p { class: "log-plain", "Loading logs..." }
                        } else if lines.is_empty() {
                            p { class: "log-plain",
                                Icon { icon: FaTerminal, width: 12, height: 12 }
                                " No log entries found."
                            }
                        }
                        for (i, line) in lines.iter().enumerate() {
                            div { key: "{i}", class: "log-line",
                                span { class: "log-number", "{i + 1}" }
                                span { class: "{log_line_class(line)}", "{line}" }
                            }
                        }
                    }
                }
            }

            p { class: "muted small", "Total entries: {lines.len()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_pick_colours() {
        assert_eq!(log_line_class("2025-01-01 ERROR db down"), "log-error");
        assert_eq!(log_line_class("Traceback: ValueError Exception raised"), "log-error");
        assert_eq!(log_line_class("WARNING slow query"), "log-warning");
        assert_eq!(log_line_class("INFO user logged in"), "log-info");
        assert_eq!(log_line_class("DEBUG payload"), "log-debug");
        assert_eq!(log_line_class("plain line"), "log-plain");
    }

    #[test]
    fn error_wins_over_info() {
        assert_eq!(log_line_class("INFO retry after ERROR"), "log-error");
    }
}

//! Notification bell with an unread badge and a dropdown list.
//! Polled every `polling.notifications_secs`.

use std::time::Duration;

use api::models::{unread_count, Notification};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_config;
use crate::icons::FaBell;
use crate::{platform, Icon};

/// Mark one notification read in the local list.
fn mark_read(items: &mut [Notification], id: &str) {
    if let Some(n) = items.iter_mut().find(|n| n.id == id) {
        n.is_read = true;
    }
}

fn mark_all_read(items: &mut [Notification]) {
    for n in items.iter_mut() {
        n.is_read = true;
    }
}

fn kind_class(kind: &str) -> &'static str {
    match kind {
        "warning" => "notification-warning",
        "success" => "notification-success",
        "error" => "notification-error",
        _ => "notification-info",
    }
}

#[component]
pub fn NotificationBell() -> Element {
    let auth = use_auth();
    let config = use_config();
    let mut items = use_signal(Vec::<Notification>::new);
    let mut open = use_signal(|| false);
    let interval = Duration::from_secs(u64::from(config.polling.notifications_secs.max(1)));

    use_effect(move || {
        spawn(async move {
            loop {
                if auth.user().is_some() {
                    match auth.client().notifications().await {
                        Ok(list) => items.set(list),
                        Err(e) => {
                            if !auth.check(&e) {
                                // Keep the last list; the next tick retries
                                tracing::warn!("failed to load notifications: {e}");
                            }
                        }
                    }
                }
                platform::sleep(interval).await;
            }
        });
    });

    let unread = unread_count(&items.read());

    let on_mark_all = move |_| {
        spawn(async move {
            match auth.client().mark_all_notifications_read().await {
                Ok(_) => mark_all_read(&mut items.write()),
                Err(e) => {
                    auth.check(&e);
                    tracing::warn!("mark all read failed: {e}");
                }
            }
        });
    };

    rsx! {
        div { class: "notification-bell",
            button {
                class: "icon-button",
                title: "Notifications",
                onclick: move |_| open.toggle(),
                Icon { icon: FaBell, width: 16, height: 16 }
                if unread > 0 {
                    span { class: "notification-badge", "{unread}" }
                }
            }
            if open() {
                div { class: "notification-dropdown",
                    div { class: "notification-dropdown-header",
                        span { "Notifications" }
                        if unread > 0 {
                            button { class: "link-button", onclick: on_mark_all, "Mark all read" }
                        }
                    }
                    if items.read().is_empty() {
                        p { class: "notification-empty", "No notifications" }
                    }
                    for item in items() {
                        div {
                            key: "{item.id}",
                            class: if item.is_read { "notification-item" } else { "notification-item unread" },
                            onclick: {
                                let id = item.id.clone();
                                let is_read = item.is_read;
                                move |_| {
                                    if is_read {
                                        return;
                                    }
                                    let id = id.clone();
                                    spawn(async move {
                                        match auth.client().mark_notification_read(&id).await {
                                            Ok(_) => mark_read(&mut items.write(), &id),
                                            Err(e) => {
                                                auth.check(&e);
                                                tracing::warn!("mark read failed: {e}");
                                            }
                                        }
                                    });
                                }
                            },
                            span { class: "notification-dot {kind_class(&item.kind)}" }
                            div {
                                p { class: "notification-title", "{item.title}" }
                                p { class: "notification-message", "{item.message}" }
                                p { class: "notification-date", "{item.date_label()}" }
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

    fn note(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("n{id}"),
            is_read,
            ..Default::default()
        }
    }

    #[test]
    fn marking_updates_the_badge_count() {
        let mut items = vec![note("1", false), note("2", false), note("3", true)];
        assert_eq!(unread_count(&items), 2);

        mark_read(&mut items, "2");
        assert_eq!(unread_count(&items), 1);

        mark_read(&mut items, "missing");
        assert_eq!(unread_count(&items), 1);

        mark_all_read(&mut items);
        assert_eq!(unread_count(&items), 0);
    }

    #[test]
    fn unknown_kinds_render_as_info() {
        assert_eq!(kind_class("warning"), "notification-warning");
        assert_eq!(kind_class("bogus"), "notification-info");
    }
}

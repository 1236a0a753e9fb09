//! Transient notifications stacked in the corner of the screen.
//!
//! [`ToastProvider`] owns the queue; anything below it calls [`use_toast`]
//! and pushes messages with `toast.success(..)` / `toast.error(..)`.

use std::time::Duration;

use dioxus::prelude::*;

use crate::platform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
    pub description: Option<String>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(4),
            description: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ToastItem {
    id: u64,
    kind: ToastKind,
    title: String,
    description: Option<String>,
    duration: Duration,
}

/// Handle returned by [`use_toast`]. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, title: impl Into<String>, options: ToastOptions) {
        self.push(ToastKind::Success, title.into(), options);
    }

    pub fn error(&self, title: impl Into<String>, options: ToastOptions) {
        self.push(ToastKind::Error, title.into(), options);
    }

    fn push(&self, kind: ToastKind, title: String, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        *next_id.write() += 1;
        items.write().push(ToastItem {
            id,
            kind,
            title,
            description: options.description,
            duration: options.duration,
        });
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<ToastItem>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div { class: "toast-stack",
            for item in items() {
                ToastEntry { key: "{item.id}", item: item.clone(), toasts }
            }
        }
    }
}

/// One toast. The expiry timer lives in this scope so it is owned by the
/// provider's subtree, not by whichever page raised the toast.
#[component]
fn ToastEntry(item: ToastItem, toasts: Toasts) -> Element {
    let id = item.id;
    let duration = item.duration;
    use_hook(move || {
        spawn(async move {
            platform::sleep(duration).await;
            toasts.dismiss(id);
        })
    });

    rsx! {
        div {
            class: "{item.kind.class()}",
            onclick: move |_| toasts.dismiss(id),
            p { class: "toast-title", "{item.title}" }
            if let Some(description) = &item.description {
                p { class: "toast-description", "{description}" }
            }
        }
    }
}

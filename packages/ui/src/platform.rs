//! Small platform shims: timers, clock, randomness and the document root.
//!
//! The browser build uses `gloo-timers` and `js-sys`; native builds (tests,
//! desktop previews) fall back to tokio and `rand`.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Milliseconds since the epoch, with sub-millisecond precision where available.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Uniform sample in `0.0..1.0`.
#[cfg(target_arch = "wasm32")]
pub fn random() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random() -> f64 {
    rand::random::<f64>()
}

/// Toggle the `dark` class on `<html>`.
#[cfg(target_arch = "wasm32")]
pub fn set_dark_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        tracing::warn!("could not update the document theme class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_dark_class(_dark: bool) {}

/// Ask the user to confirm a destructive action.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    true
}

/// Origin of the page, e.g. `https://farm.example.com`.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// ID-token credential left on `window.googleCredential` by the Google
/// Identity callback on the host page.
#[cfg(target_arch = "wasm32")]
pub fn google_credential() -> Option<String> {
    let window = web_sys::window()?;
    let key = js_sys::JsString::from("googleCredential");
    js_sys::Reflect::get(window.as_ref(), &key)
        .ok()?
        .as_string()
        .filter(|c| !c.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn google_credential() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

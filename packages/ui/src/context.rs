//! Application-wide context: configuration and the storage handle.

use dioxus::prelude::*;
use store::{AppConfig, PlatformStore, SessionStore};

/// Backend origin used when neither the config nor the page supplies one.
pub const FALLBACK_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: SessionStore<PlatformStore>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: SessionStore::new(PlatformStore::default()),
        }
    }

    /// Configured backend origin; an empty setting means the page's own origin.
    pub fn base_url(&self) -> String {
        let fallback = crate::platform::page_origin().unwrap_or_else(|| FALLBACK_BASE_URL.to_string());
        self.config.base_url_or(&fallback)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_config() -> AppConfig {
    use_app_context().config
}

/// Provides [`AppContext`]. Must wrap the theme and auth providers.
#[component]
pub fn ConfigProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| {
        let context = AppContext::new(config.clone());
        tracing::info!("backend origin: {}", context.base_url());
        context
    });

    rsx! {
        {children}
    }
}

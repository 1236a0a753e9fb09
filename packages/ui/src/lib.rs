//! Shared UI for the farm dashboard: providers, layout chrome, presentation
//! primitives and every page view.
//!
//! Views never touch the router. They receive an `on_navigate` callback and
//! leave URL handling to the platform crate.

use dioxus::prelude::*;

pub mod components;

/// Base theme and primitives. The binary links it once at the root.
pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;

mod context;
pub use context::{use_app_context, use_config, AppContext, ConfigProvider, FALLBACK_BASE_URL};

pub mod access;
pub use access::{after_sign_in, decide, Access, Decision, Viewer};

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod theme;
pub use theme::{apply_theme, use_theme, ThemeProvider, ThemeSignal, ThemeToggle};

mod network_status;
pub use network_status::{NetworkStatus, Quality};

mod notifications;
pub use notifications::NotificationBell;

mod sidebar;
pub use sidebar::{menu_for, MenuIcon, MenuItem, Sidebar, SidebarToggle};

mod navbar;
pub use navbar::Navbar;

mod google;
pub use google::GoogleAuthButton;

pub mod charts;

pub mod views;

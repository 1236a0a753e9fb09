use dioxus::prelude::*;
use store::Role;

use crate::auth::use_auth;
use crate::icons::{
    FaBars, FaBug, FaChartLine, FaCloudRain, FaComments, FaGauge, FaRightFromBracket,
    FaSeedling, FaStore, FaTerminal, FaUser, FaUsers, FaWandMagicSparkles, FaXmark,
};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Farm,
    Yield,
    Advisory,
    Pest,
    Recommendation,
    Market,
    Weather,
    Profile,
    Users,
    Logs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: MenuIcon,
}

const fn item(label: &'static str, path: &'static str, icon: MenuIcon) -> MenuItem {
    MenuItem { label, path, icon }
}

const ADMIN_MENU: &[MenuItem] = &[
    item("Admin Dashboard", "/admin/dashboard", MenuIcon::Dashboard),
    item("User Management", "/admin/users", MenuIcon::Users),
    item("System Logs", "/admin/logs", MenuIcon::Logs),
];

const FARMER_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard", MenuIcon::Dashboard),
    item("Farm Management", "/farm", MenuIcon::Farm),
    item("Yield Prediction", "/yield", MenuIcon::Yield),
    item("Crop Advisory", "/advisory", MenuIcon::Advisory),
    item("Pest Detection", "/pest", MenuIcon::Pest),
    item("Crop Recommendation", "/crop/recommendation", MenuIcon::Recommendation),
    item("Market Prices", "/market", MenuIcon::Market),
    item("Weather Alerts", "/weather", MenuIcon::Weather),
    item("Profile", "/profile", MenuIcon::Profile),
];

/// Navigation entries for a role.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::User => FARMER_MENU,
    }
}

#[component]
fn MenuGlyph(icon: MenuIcon) -> Element {
    let (w, h) = (18, 18);
    match icon {
        MenuIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: w, height: h } },
        MenuIcon::Farm => rsx! { Icon { icon: FaSeedling, width: w, height: h } },
        MenuIcon::Yield => rsx! { Icon { icon: FaChartLine, width: w, height: h } },
        MenuIcon::Advisory => rsx! { Icon { icon: FaComments, width: w, height: h } },
        MenuIcon::Pest => rsx! { Icon { icon: FaBug, width: w, height: h } },
        MenuIcon::Recommendation => rsx! { Icon { icon: FaWandMagicSparkles, width: w, height: h } },
        MenuIcon::Market => rsx! { Icon { icon: FaStore, width: w, height: h } },
        MenuIcon::Weather => rsx! { Icon { icon: FaCloudRain, width: w, height: h } },
        MenuIcon::Profile => rsx! { Icon { icon: FaUser, width: w, height: h } },
        MenuIcon::Users => rsx! { Icon { icon: FaUsers, width: w, height: h } },
        MenuIcon::Logs => rsx! { Icon { icon: FaTerminal, width: w, height: h } },
    }
}

#[component]
pub fn Sidebar(
    open: bool,
    active_path: String,
    on_navigate: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let state = auth.state();
    let user = state.user().cloned();
    let role = user.as_ref().map(|u| u.role).unwrap_or_default();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        if open {
            div { class: "sidebar-overlay", onclick: move |_| on_close.call(()) }
        }

        aside {
            class: if open { "sidebar open" } else { "sidebar" },
            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    Icon { icon: FaSeedling, width: 28, height: 28 }
                    span { "AgriPredict" }
                }
                button {
                    class: "sidebar-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }

            nav { class: "sidebar-menu",
                for entry in menu_for(role).iter().copied() {
                    button {
                        key: "{entry.path}",
                        class: if active_path == entry.path { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| {
                            on_navigate.call(entry.path.to_string());
                            on_close.call(());
                        },
                        MenuGlyph { icon: entry.icon }
                        span { "{entry.label}" }
                    }
                }
            }

            div { class: "sidebar-bottom",
                if let Some(u) = user {
                    div { class: "sidebar-user",
                        p { class: "sidebar-user-name", "{u.name}" }
                        p { class: "sidebar-user-email", "{u.email}" }
                    }
                }
                button {
                    class: "sidebar-item sidebar-logout",
                    onclick: move |_| {
                        auth.logout();
                        on_navigate.call(crate::access::LOGIN_PATH.to_string());
                        on_close.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 18, height: 18 }
                    span { "Logout" }
                }
            }
        }
    }
}

/// Hamburger button shown on narrow screens.
#[component]
pub fn SidebarToggle(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-button sidebar-toggle",
            onclick: move |_| onclick.call(()),
            Icon { icon: FaBars, width: 20, height: 20 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_see_the_console_menu() {
        let paths: Vec<_> = menu_for(Role::Admin).iter().map(|i| i.path).collect();
        assert_eq!(paths, ["/admin/dashboard", "/admin/users", "/admin/logs"]);
    }

    #[test]
    fn farmers_see_every_farm_page() {
        let menu = menu_for(Role::User);
        assert_eq!(menu.len(), 9);
        assert_eq!(menu[0].path, "/dashboard");
        assert_eq!(menu[8].path, "/profile");
        assert!(menu.iter().all(|i| !i.path.starts_with("/admin")));
    }
}

use dioxus::prelude::*;

use crate::network_status::NetworkStatus;
use crate::notifications::NotificationBell;
use crate::sidebar::SidebarToggle;
use crate::theme::ThemeToggle;

#[component]
pub fn Navbar(on_menu_click: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "navbar",
            div { class: "navbar-left",
                SidebarToggle { onclick: on_menu_click }
                h1 { class: "navbar-title", "Agricultural Management System" }
            }
            div { class: "navbar-right",
                NetworkStatus {}
                NotificationBell {}
                ThemeToggle {}
            }
        }
    }
}

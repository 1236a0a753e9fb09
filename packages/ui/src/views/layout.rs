use dioxus::prelude::*;

use crate::navbar::Navbar;
use crate::sidebar::Sidebar;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Shell around every signed-in page: sidebar, top bar and the routed page.
///
/// Platform packages pass the current path and a navigation callback, and
/// render their router outlet as `children`.
#[component]
pub fn AppLayoutView(
    /// Current path, used to highlight the matching menu entry.
    active_path: String,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let mut sidebar_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "app-shell",
            Sidebar {
                open: sidebar_open(),
                active_path,
                on_navigate: move |path: String| {
                    // The drawer only overlays content on small screens
                    sidebar_open.set(false);
                    on_navigate.call(path);
                },
                on_close: move |_| sidebar_open.set(false),
            }
            div { class: "app-main",
                Navbar { on_menu_click: move |_| sidebar_open.toggle() }
                main { class: "app-content", {children} }
            }
        }
    }
}

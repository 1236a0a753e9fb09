use dioxus::prelude::*;

use ui::views::{AppLayoutView, LoadingPanel};
use ui::{decide, use_auth, Access, Decision};

use crate::Route;

/// Renders `children` only when the current viewer may see `access` pages.
#[component]
fn Guard(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match decide(access, auth.state().viewer()) {
        Decision::Render => children,
        Decision::Loading => rsx! {
            LoadingPanel { label: "Checking your session..." }
        },
        Decision::Redirect(path) => {
            nav.replace(path);
            rsx! {}
        }
    }
}

/// Sidebar shell around the routed page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        AppLayoutView {
            active_path: route.to_string(),
            on_navigate: move |path: String| {
                nav.push(path);
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn GuestLayout() -> Element {
    rsx! {
        Guard { access: Access::Guest, Outlet::<Route> {} }
    }
}

#[component]
pub fn AdminGuestLayout() -> Element {
    rsx! {
        Guard { access: Access::GuestAdmin, Outlet::<Route> {} }
    }
}

#[component]
pub fn FarmerLayout() -> Element {
    rsx! {
        Guard { access: Access::Authenticated, Shell {} }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        Guard { access: Access::Admin, Shell {} }
    }
}

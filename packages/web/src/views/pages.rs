use dioxus::prelude::*;

use ui::views::{
    AdminDashboardView, AdminLoginView, AdvisoryView, CropRecommendationView, DashboardView,
    FarmView, LoginView, LogsView, MarketView, PestDetectionView, ProfileView, SignupView,
    UsersView, WeatherView, YieldFormView, YieldResultsView,
};

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    rsx! {
        SignupView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    let nav = use_navigator();
    rsx! {
        AdminLoginView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn Farm() -> Element {
    rsx! {
        FarmView {}
    }
}

#[component]
pub fn YieldPrediction() -> Element {
    let nav = use_navigator();
    rsx! {
        YieldFormView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn YieldResults() -> Element {
    let nav = use_navigator();
    rsx! {
        YieldResultsView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn Advisory() -> Element {
    rsx! {
        AdvisoryView {}
    }
}

#[component]
pub fn PestDetection() -> Element {
    rsx! {
        PestDetectionView {}
    }
}

#[component]
pub fn CropRecommendation() -> Element {
    rsx! {
        CropRecommendationView {}
    }
}

#[component]
pub fn Market() -> Element {
    rsx! {
        MarketView {}
    }
}

#[component]
pub fn Weather() -> Element {
    rsx! {
        WeatherView {}
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfileView {}
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        AdminDashboardView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        UsersView {}
    }
}

#[component]
pub fn AdminLogs() -> Element {
    rsx! {
        LogsView {}
    }
}

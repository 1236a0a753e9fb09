use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use store::AppConfig;
use ui::components::ToastProvider;
use ui::{AuthProvider, ConfigProvider, ThemeProvider};
use views::{
    AdminDashboard, AdminGuestLayout, AdminLayout, AdminLogin, AdminLogs, AdminUsers, Advisory,
    CropRecommendation, Dashboard, Farm, FarmerLayout, GuestLayout, Login, Market, PestDetection,
    Profile, Signup, Weather, YieldPrediction, YieldResults,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},

    #[layout(GuestLayout)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]

    #[layout(AdminGuestLayout)]
        #[route("/admin/login")]
        AdminLogin {},
    #[end_layout]

    #[layout(FarmerLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/farm")]
        Farm {},
        #[route("/yield")]
        YieldPrediction {},
        #[route("/yield/results")]
        YieldResults {},
        #[route("/advisory")]
        Advisory {},
        #[route("/pest")]
        PestDetection {},
        #[route("/crop/recommendation")]
        CropRecommendation {},
        #[route("/market")]
        Market {},
        #[route("/weather")]
        Weather {},
        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[layout(AdminLayout)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/logs")]
        AdminLogs {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../agri.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

/// Embedded `agri.toml`, with the backend origin optionally overridden at build time.
fn load_config() -> AppConfig {
    let config = AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("agri.toml is invalid, using defaults: {e}");
        AppConfig::default()
    });
    match option_env!("AGRI_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        ConfigProvider { config,
            ThemeProvider {
                AuthProvider {
                    ToastProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Redirect `/` to `/login`; the login page forwards signed-in users on.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse::<Route>().unwrap()
    }

    #[test]
    fn farmer_paths_resolve() {
        assert_eq!(parse("/dashboard"), Route::Dashboard {});
        assert_eq!(parse("/yield/results"), Route::YieldResults {});
        assert_eq!(parse("/crop/recommendation"), Route::CropRecommendation {});
        assert_eq!(parse("/pest"), Route::PestDetection {});
    }

    #[test]
    fn admin_paths_resolve() {
        assert_eq!(parse("/admin/login"), Route::AdminLogin {});
        assert_eq!(parse("/admin/dashboard"), Route::AdminDashboard {});
        assert_eq!(parse("/admin/users"), Route::AdminUsers {});
        assert_eq!(parse("/admin/logs"), Route::AdminLogs {});
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert!(matches!(parse("/nope"), Route::NotFound { .. }));
        assert!(matches!(parse("/admin/nope"), Route::NotFound { .. }));
    }

    #[test]
    fn routes_render_back_to_their_path() {
        assert_eq!(Route::Market {}.to_string(), "/market");
        assert_eq!(Route::AdminUsers {}.to_string(), "/admin/users");
    }

    #[test]
    fn embedded_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.polling.market_secs, 30);
        assert_eq!(config.weather.default_location, "Islamabad");
        assert!(config.api.base_url.is_empty());
    }
}

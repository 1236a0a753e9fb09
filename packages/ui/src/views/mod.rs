mod common;
pub use common::{EmptyState, LoadingPanel, PageHeader};

mod layout;
pub use layout::AppLayoutView;

mod auth;
pub use auth::{AdminLoginView, LoginView, SignupView};

mod dashboard;
pub use dashboard::DashboardView;

mod farm;
pub use farm::FarmView;

mod yield_form;
pub use yield_form::YieldFormView;

mod yield_results;
pub use yield_results::YieldResultsView;

mod advisory;
pub use advisory::AdvisoryView;

mod pest;
pub use pest::PestDetectionView;

mod crop_recommendation;
pub use crop_recommendation::CropRecommendationView;

mod market;
pub use market::MarketView;

mod weather;
pub use weather::WeatherView;

mod profile;
pub use profile::ProfileView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod users;
pub use users::UsersView;

mod logs;
pub use logs::LogsView;

/// `(value, label)` pairs for a [`Select`](crate::components::Select) whose
/// values are the labels themselves.
pub(crate) fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

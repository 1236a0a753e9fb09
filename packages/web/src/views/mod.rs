//! Route components. Each one hands a shared view a navigation callback.

mod guards;
pub use guards::{AdminGuestLayout, AdminLayout, FarmerLayout, GuestLayout};

mod pages;
pub use pages::{
    AdminDashboard, AdminLogin, AdminLogs, AdminUsers, Advisory, CropRecommendation, Dashboard,
    Farm, Login, Market, PestDetection, Profile, Signup, Weather, YieldPrediction, YieldResults,
};

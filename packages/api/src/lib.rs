//! # API crate: the REST client for the farm dashboard backend
//!
//! Every page of the web client talks to the backend through [`ApiClient`].
//! The backend owns all computation (model inference, search, ranking, undo,
//! weather aggregation); this crate only builds requests, decodes the loosely
//! typed JSON into Rust types and turns failures into [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Endpoints | Purpose |
//! |--------|-----------|---------|
//! | [`auth`] | `/api/auth/*` | login, signup, verify, Google login; [`SessionManager`] for the persisted session |
//! | [`users`] | `/api/users/*` | list, search, create, update, delete accounts |
//! | [`farms`] | `/api/farms/*` | the signed-in user's farms |
//! | [`market`] | `/api/market/*`, `/api/advisory/` | prices, search, top gainers, history, stage advice |
//! | [`weather`] | `/api/weather/*` | current conditions, forecast, advisories per location |
//! | [`dashboard`] | `/api/dashboard/*`, `/api/predict/history` | farmer dashboard data and its batched load |
//! | [`predict`] | `/api/predict/yield`, `/api/crop/recommendation`, `/api/detect/pest` | model inference |
//! | [`admin`] | `/api/admin/*` | undo, connectivity, ISP, system health, logs, network reports |
//! | [`notifications`] | `/api/notifications/*` | list and mark read |
//! | [`models`] | | request and response payloads |
//!
//! Session-level types ([`User`], [`Session`], [`Role`]) live in the `store`
//! crate because they are persisted as well as exchanged; they are re-exported
//! here so callers only need one import path.

pub mod admin;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod farms;
pub mod market;
pub mod models;
pub mod notifications;
pub mod predict;
pub mod users;
pub mod weather;

pub use auth::{SessionManager, SignupOutcome, SignupRequest};
pub use client::{Ack, ApiClient};
pub use dashboard::{history_counts, DashboardOverview};
pub use error::{ApiError, ApiResult};
pub use market::first_rising;

pub use store::{AppConfig, Role, Session, Theme, User};

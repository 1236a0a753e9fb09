//! Client-side persistence for the farm dashboard.
//!
//! Everything the browser keeps between reloads goes through a
//! [`KeyValueStore`]: the session (`token` + `user`), the theme choice and the
//! yield prediction draft. On the web the store is `window.localStorage`;
//! natively and in tests it is an in-memory map.

pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::AppConfig;
pub use error::StoreError;
pub use models::{Role, Session, Theme, User};
pub use session::SessionStore;

/// Platform default store: `localStorage` in the browser, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStore;

/// Platform default store: `localStorage` in the browser, memory elsewhere.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

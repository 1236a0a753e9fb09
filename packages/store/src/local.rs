//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. It is a
//! zero-size handle that looks up `window.localStorage` on every call, so it
//! is `Copy`-cheap to pass around and never holds a JS reference across
//! awaits.
//!
//! Reads swallow errors (private browsing modes can throw on access) and
//! report `None`. Writes surface quota or access failures as
//! [`StoreError::WriteRejected`].

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage()
            .ok_or_else(|| StoreError::Unavailable("window.localStorage".to_string()))?;
        storage.set_item(key, value).map_err(|_| StoreError::WriteRejected {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("failed to remove `{key}` from localStorage");
            }
        }
    }
}

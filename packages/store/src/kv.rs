use crate::error::StoreError;

/// String key/value storage with `localStorage` semantics.
///
/// Reads never fail: a missing key and an unreadable backend both yield
/// `None`, so callers degrade to "nothing stored".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

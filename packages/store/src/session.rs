//! # Typed access to persisted client state
//!
//! [`SessionStore`] wraps any [`KeyValueStore`] and owns the storage keys the
//! application uses. The keys match the ones earlier releases of the web
//! client wrote, so an existing browser profile keeps its session:
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | bearer token, raw string |
//! | `user` | [`User`] as JSON |
//! | `theme` | `"light"` or `"dark"` |
//! | `yieldPredictionData` | yield form draft as JSON |
//!
//! A session is only considered present when *both* the token and a parsable
//! user are stored. A corrupted `user` entry reads as "logged out".

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{Session, Theme, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const THEME_KEY: &str = "theme";
pub const YIELD_DRAFT_KEY: &str = "yieldPredictionData";

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    inner: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn token(&self) -> Option<String> {
        self.inner.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        self.load_json(USER_KEY)
    }

    pub fn load_session(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { user, token })
    }

    pub fn save_session(&self, session: &Session) -> Result<(), StoreError> {
        self.save_json(USER_KEY, &session.user)?;
        self.inner.set(TOKEN_KEY, &session.token)
    }

    /// Replace the stored user, keeping the token.
    pub fn update_user(&self, user: &User) -> Result<(), StoreError> {
        self.save_json(USER_KEY, user)
    }

    pub fn clear_session(&self) {
        self.inner.remove(USER_KEY);
        self.inner.remove(TOKEN_KEY);
    }

    pub fn load_theme(&self) -> Theme {
        self.inner
            .get(THEME_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.inner.set(THEME_KEY, theme.as_str())
    }

    pub fn save_yield_draft<T: Serialize>(&self, draft: &T) -> Result<(), StoreError> {
        self.save_json(YIELD_DRAFT_KEY, draft)
    }

    pub fn load_yield_draft<T: DeserializeOwned>(&self) -> Option<T> {
        self.load_json(YIELD_DRAFT_KEY)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.inner.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring unreadable `{key}` entry: {e}");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.inner.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;
    use serde::Deserialize;

    fn farmer() -> User {
        User {
            id: "42".to_string(),
            name: "Farah".to_string(),
            email: "farah@example.com".to_string(),
            role: Role::User,
            city: Some("Multan".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_roundtrip_and_clear() {
        let store = SessionStore::new(MemoryStore::new());
        assert!(store.load_session().is_none());

        let session = Session {
            user: farmer(),
            token: "tok-123".to_string(),
        };
        store.save_session(&session).unwrap();

        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.load_session(), Some(session));

        store.clear_session();
        assert!(store.load_session().is_none());
        assert!(store.token().is_none());
        assert!(store.inner().is_empty());
    }

    #[test]
    fn test_session_requires_token_and_user() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());

        kv.set(TOKEN_KEY, "tok").unwrap();
        assert!(store.load_session().is_none());

        kv.set(USER_KEY, "{not json").unwrap();
        assert!(store.load_session().is_none());

        kv.set(USER_KEY, r#"{"id":1,"name":"A","email":"a@b.c","role":"user"}"#)
            .unwrap();
        assert_eq!(store.load_session().unwrap().user.id, "1");

        kv.set(TOKEN_KEY, "").unwrap();
        assert!(store.load_session().is_none());
    }

    #[test]
    fn test_update_user_keeps_token() {
        let store = SessionStore::new(MemoryStore::new());
        store
            .save_session(&Session {
                user: farmer(),
                token: "tok".to_string(),
            })
            .unwrap();

        let mut updated = farmer();
        updated.phone = Some("+92 300 0000000".to_string());
        store.update_user(&updated).unwrap();

        let session = store.load_session().unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.phone.as_deref(), Some("+92 300 0000000"));
    }

    #[test]
    fn test_theme_persists() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());
        assert_eq!(store.load_theme(), Theme::Light);

        store.save_theme(Theme::Dark).unwrap();
        // A fresh handle over the same storage sees the saved theme, as after a reload.
        let reloaded = SessionStore::new(kv);
        assert_eq!(reloaded.load_theme(), Theme::Dark);
    }

    #[test]
    fn test_yield_draft_roundtrip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Draft {
            crop: String,
            area: f64,
        }

        let store = SessionStore::new(MemoryStore::new());
        assert!(store.load_yield_draft::<Draft>().is_none());

        let draft = Draft {
            crop: "Wheat".to_string(),
            area: 12.5,
        };
        store.save_yield_draft(&draft).unwrap();
        assert_eq!(store.load_yield_draft::<Draft>(), Some(draft));
    }
}

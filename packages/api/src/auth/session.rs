//! # Session lifecycle
//!
//! [`SessionManager`] is what the auth provider drives. It owns the rules:
//!
//! - **login** stores `{user, token}` only on success; a failed attempt leaves
//!   whatever was stored untouched.
//! - **restore** runs once on startup: no token means signed out, otherwise
//!   the token is verified and *any* failure (401, network, garbage) clears
//!   the stored session.
//! - **logout** clears both keys.
//!
//! It is generic over the key-value backend so the same code runs against
//! `localStorage` in the browser and a `MemoryStore` in tests.

use store::{KeyValueStore, Session, SessionStore, User};

use crate::auth::SignupRequest;
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

/// What a successful signup led to.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupOutcome {
    /// The backend issued a token; the user is signed in.
    SignedIn(Session),
    /// The account exists but the user still has to log in.
    Created { message: String },
}

#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    client: ApiClient,
    store: SessionStore<S>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// `client` is used for the unauthenticated calls; its token is ignored.
    pub fn new(client: ApiClient, store: SessionStore<S>) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// The persisted session, without contacting the backend.
    pub fn current(&self) -> Option<Session> {
        self.store.load_session()
    }

    /// A client carrying the stored bearer token.
    pub fn authorized_client(&self) -> ApiClient {
        self.client.clone().with_token(self.store.token())
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let session = self.client.login(email, password).await?;
        self.persist(&session)?;
        tracing::info!("signed in as {} ({})", session.user.email, session.user.role.as_str());
        Ok(session)
    }

    /// Login for the admin console. A non-admin account is rejected and its
    /// session is not kept.
    pub async fn login_admin(&self, email: &str, password: &str) -> ApiResult<Session> {
        let session = self.client.login(email, password).await?;
        if !session.user.is_admin() {
            tracing::warn!("{} tried the admin console without the admin role", session.user.email);
            return Err(ApiError::Invalid(
                "Invalid admin credentials. Please try again.".to_string(),
            ));
        }
        self.persist(&session)?;
        Ok(session)
    }

    pub async fn google_login(&self, credential: &str) -> ApiResult<Session> {
        let session = self.client.google_login(credential).await?;
        self.persist(&session)?;
        Ok(session)
    }

    pub async fn signup(&self, request: SignupRequest) -> ApiResult<SignupOutcome> {
        let request = request.normalized()?;
        let (session, message) = self.client.signup(&request).await?;
        match session {
            Some(session) => {
                self.persist(&session)?;
                Ok(SignupOutcome::SignedIn(session))
            }
            None => Ok(SignupOutcome::Created { message }),
        }
    }

    /// Verify the stored token. Returns the refreshed session, or `None` after
    /// clearing storage when there is no token or it no longer verifies.
    pub async fn restore(&self) -> Option<Session> {
        let token = self.store.token()?;
        let client = self.client.clone().with_token(Some(token.clone()));

        match client.verify().await {
            Ok(user) => {
                let session = Session { user, token };
                if let Err(e) = self.store.update_user(&session.user) {
                    tracing::warn!("could not refresh stored user: {e}");
                }
                Some(session)
            }
            Err(e) => {
                tracing::warn!("session verification failed: {e}");
                self.logout();
                None
            }
        }
    }

    /// Replace the stored user after a profile edit.
    pub fn update_user(&self, user: &User) -> ApiResult<()> {
        self.store
            .update_user(user)
            .map_err(|e| ApiError::Invalid(e.to_string()))
    }

    pub fn logout(&self) {
        self.store.clear_session();
    }

    fn persist(&self, session: &Session) -> ApiResult<()> {
        self.store.save_session(session).map_err(|e| {
            tracing::error!("could not persist session: {e}");
            ApiError::Invalid(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, Role};

    fn manager(base: &str) -> SessionManager<MemoryStore> {
        SessionManager::new(ApiClient::new(base), SessionStore::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn restore_without_token_is_signed_out() {
        let manager = manager("http://127.0.0.1:9");
        assert!(manager.restore().await.is_none());
        assert!(manager.current().is_none());
    }

    #[tokio::test]
    async fn restore_clears_session_when_backend_unreachable() {
        // Port 9 (discard) is closed on loopback, so the request fails fast.
        let manager = manager("http://127.0.0.1:9");
        manager
            .store()
            .save_session(&Session {
                user: User {
                    id: "1".into(),
                    name: "A".into(),
                    email: "a@b.c".into(),
                    role: Role::User,
                    ..Default::default()
                },
                token: "stale".into(),
            })
            .unwrap();

        assert!(manager.restore().await.is_none());
        assert!(manager.current().is_none());
        assert!(manager.store().token().is_none());
    }

    #[tokio::test]
    async fn signup_validation_happens_before_request() {
        let manager = manager("http://127.0.0.1:9");
        let err = manager.signup(SignupRequest::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn authorized_client_uses_stored_token() {
        let manager = manager("http://localhost:5000");
        assert!(manager.authorized_client().token().is_none());
        manager.store().inner().set("token", "abc").unwrap();
        assert_eq!(manager.authorized_client().token(), Some("abc"));
    }
}

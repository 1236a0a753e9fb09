//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] restores the persisted session on mount and exposes an
//! [`Auth`] handle. Pages call its async methods for login, signup and
//! logout, and pass failed requests through [`Auth::check`] so a 401 anywhere
//! signs the user out.

use api::{ApiClient, ApiError, ApiResult, SessionManager, SignupOutcome, SignupRequest};
use dioxus::prelude::*;
use store::{PlatformStore, Session, User};

use crate::access::Viewer;
use crate::context::use_app_context;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the startup verification has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn viewer(&self) -> Viewer {
        if self.loading {
            Viewer::Verifying
        } else {
            match self.user() {
                Some(user) => Viewer::SignedIn(user.role),
                None => Viewer::Anonymous,
            }
        }
    }
}

/// Copyable handle to the auth state and the session manager behind it.
#[derive(Clone, Copy, PartialEq)]
pub struct Auth {
    state: Signal<AuthState>,
    manager: Signal<SessionManager<PlatformStore>>,
}

impl Auth {
    /// Current state; subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    /// A client carrying the current bearer token.
    pub fn client(&self) -> ApiClient {
        self.manager.peek().authorized_client()
    }

    fn manager(&self) -> SessionManager<PlatformStore> {
        self.manager.peek().clone()
    }

    fn signed_in(mut self, session: Session) {
        self.state.set(AuthState {
            session: Some(session),
            loading: false,
        });
    }

    /// `POST /auth/login`. On failure the state is left as it was.
    pub async fn login(self, email: String, password: String) -> ApiResult<Session> {
        let session = self.manager().login(&email, &password).await?;
        self.signed_in(session.clone());
        Ok(session)
    }

    pub async fn login_admin(self, email: String, password: String) -> ApiResult<Session> {
        let session = self.manager().login_admin(&email, &password).await?;
        self.signed_in(session.clone());
        Ok(session)
    }

    pub async fn google_login(self, credential: String) -> ApiResult<Session> {
        let session = self.manager().google_login(&credential).await?;
        self.signed_in(session.clone());
        Ok(session)
    }

    pub async fn signup(self, request: SignupRequest) -> ApiResult<SignupOutcome> {
        let outcome = self.manager().signup(request).await?;
        if let SignupOutcome::SignedIn(session) = &outcome {
            self.signed_in(session.clone());
        }
        Ok(outcome)
    }

    /// Replace the signed-in user after a profile edit.
    pub fn update_user(mut self, user: User) {
        if let Err(e) = self.manager().update_user(&user) {
            tracing::warn!("could not persist updated user: {e}");
        }
        if let Some(session) = self.state.write().session.as_mut() {
            session.user = user;
        }
    }

    pub fn logout(mut self) {
        self.manager().logout();
        self.state.set(AuthState {
            session: None,
            loading: false,
        });
    }

    /// Sign out when `err` is a 401. Returns whether it was.
    pub fn check(self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            tracing::warn!("session rejected by the backend, signing out");
            self.logout();
            true
        } else {
            false
        }
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Must sit inside `ConfigProvider`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let context = use_app_context();
    let manager = use_signal(|| {
        SessionManager::new(ApiClient::new(context.base_url()), context.store.clone())
    });
    let mut state = use_signal(AuthState::default);
    use_context_provider(|| Auth { state, manager });

    // Verify the stored token once on mount
    let _ = use_resource(move || async move {
        let manager = manager.peek().clone();
        let session = manager.restore().await;
        state.set(AuthState {
            session,
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn session(role: Role) -> Session {
        Session {
            user: User {
                id: "1".to_string(),
                name: "Amina".to_string(),
                email: "amina@example.com".to_string(),
                role,
                ..Default::default()
            },
            token: "tok".to_string(),
        }
    }

    #[test]
    fn viewer_tracks_loading_and_role() {
        assert_eq!(AuthState::default().viewer(), Viewer::Verifying);

        let signed_out = AuthState {
            session: None,
            loading: false,
        };
        assert_eq!(signed_out.viewer(), Viewer::Anonymous);
        assert!(!signed_out.is_authenticated());

        let admin = AuthState {
            session: Some(session(Role::Admin)),
            loading: false,
        };
        assert_eq!(admin.viewer(), Viewer::SignedIn(Role::Admin));
        assert_eq!(admin.token(), Some("tok"));
    }
}

//! Authentication endpoints and the client-side session lifecycle.
//!
//! The endpoint calls here are stateless; [`SessionManager`] ties them to
//! persisted storage so a reload keeps the user signed in.

mod session;

pub use session::{SessionManager, SignupOutcome};

use serde::{Deserialize, Serialize};
use store::{Session, User};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

/// Registration form sent to `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
}

impl SignupRequest {
    /// Trim the text fields and lowercase the email, then check the required ones.
    pub fn normalized(mut self) -> ApiResult<Self> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();

        if self.name.is_empty() {
            return Err(ApiError::Invalid("Name is required".to_string()));
        }
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(ApiError::Invalid("Invalid email address".to_string()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Invalid("Password is required".to_string()));
        }
        for field in [&mut self.phone, &mut self.location, &mut self.farm_size] {
            *field = field
                .take()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }
        Ok(self)
    }
}

/// Shape shared by login, signup and google-login responses. Signup omits the token.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    fn into_session(self, path: &str) -> ApiResult<Session> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Incomplete {
                path: path.to_string(),
                field: "token",
            })?;
        let user = self.user.ok_or_else(|| ApiError::Incomplete {
            path: path.to_string(),
            field: "user",
        })?;
        Ok(Session { user, token })
    }
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    valid: bool,
    user: Option<User>,
}

impl ApiClient {
    /// `POST /api/auth/login`. 401 with `Invalid credentials` on a bad password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let body = serde_json::json!({ "email": email.trim(), "password": password });
        let response: AuthResponse = self.post("/auth/login", &body).await?;
        response.into_session("/auth/login")
    }

    /// `POST /api/auth/signup`. The backend creates the account but does not
    /// sign it in, so the session is `None` unless a token comes back.
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<(Option<Session>, String)> {
        let response: AuthResponse = self.post("/auth/signup", request).await?;
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| "User created successfully".to_string());
        let signed_in = response.user.is_some()
            && response.token.as_deref().is_some_and(|t| !t.is_empty());
        let session = if signed_in {
            Some(response.into_session("/auth/signup")?)
        } else {
            None
        };
        Ok((session, message))
    }

    /// `GET /api/auth/verify` with the client's token. Returns the fresh user record.
    pub async fn verify(&self) -> ApiResult<User> {
        let response: VerifyResponse = self.get("/auth/verify").await?;
        match response.user {
            Some(user) if response.valid => Ok(user),
            _ => Err(ApiError::Unauthorized("Session is no longer valid".to_string())),
        }
    }

    /// `POST /api/auth/google-login` with a Google Identity credential (an ID token).
    pub async fn google_login(&self, credential: &str) -> ApiResult<Session> {
        if credential.trim().is_empty() {
            return Err(ApiError::Invalid("No credential received from Google".to_string()));
        }
        let body = serde_json::json!({ "token": credential.trim() });
        let response: AuthResponse = self.post("/auth/google-login", &body).await?;
        response.into_session("/auth/google-login")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_is_normalized() {
        let request = SignupRequest {
            name: "  Zara ".into(),
            email: " Zara@Example.COM ".into(),
            password: "secret".into(),
            phone: Some("  ".into()),
            location: Some(" Lahore ".into()),
            farm_size: None,
        }
        .normalized()
        .unwrap();
        assert_eq!(request.name, "Zara");
        assert_eq!(request.email, "zara@example.com");
        assert_eq!(request.phone, None);
        assert_eq!(request.location.as_deref(), Some("Lahore"));

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn signup_request_rejects_missing_fields() {
        let err = SignupRequest {
            email: "a@b.c".into(),
            password: "x".into(),
            ..Default::default()
        }
        .normalized()
        .unwrap_err();
        assert_eq!(err.user_message(), "Name is required");

        let err = SignupRequest {
            name: "A".into(),
            email: "not-an-email".into(),
            password: "x".into(),
            ..Default::default()
        }
        .normalized()
        .unwrap_err();
        assert_eq!(err.user_message(), "Invalid email address");
    }

    #[test]
    fn auth_response_needs_token_and_user() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"user": {"id": 1, "name": "A", "email": "a@b.c"}}"#).unwrap();
        let err = response.into_session("/auth/login").unwrap_err();
        assert!(matches!(err, ApiError::Incomplete { field: "token", .. }));

        let response: AuthResponse = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        let err = response.into_session("/auth/login").unwrap_err();
        assert!(matches!(err, ApiError::Incomplete { field: "user", .. }));
    }
}

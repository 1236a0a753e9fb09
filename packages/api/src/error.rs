use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// `Unauthorized` is kept apart from other HTTP failures: it is the one
/// error the UI reacts to structurally (forced logout).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {path} is missing `{field}`")]
    Incomplete { path: String, field: &'static str },

    #[error("invalid input: {0}")]
    Invalid(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a toast or inline form error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(message) | ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Decode { .. } | ApiError::Incomplete { .. } => {
                "Unexpected response from server".to_string()
            }
            ApiError::Invalid(message) => message.clone(),
        }
    }
}

/// Extract the error text from a failed response body.
///
/// A JSON body with a non-empty `message` wins; a JSON body without one
/// becomes `Error <status>`; anything unparsable becomes `API Error`.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error {status}")),
        Err(_) => "API Error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        assert_eq!(
            error_message(409, r#"{"message": "Email already exists"}"#),
            "Email already exists"
        );
    }

    #[test]
    fn json_without_message_uses_status() {
        assert_eq!(error_message(500, r#"{"error": "boom"}"#), "Error 500");
        assert_eq!(error_message(404, r#"{"message": ""}"#), "Error 404");
    }

    #[test]
    fn non_json_body_is_generic() {
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "API Error");
        assert_eq!(error_message(500, ""), "API Error");
    }

    #[test]
    fn user_message_and_status() {
        let err = ApiError::Status {
            status: 400,
            message: "Missing required fields".to_string(),
        };
        assert_eq!(err.user_message(), "Missing required fields");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());

        let err = ApiError::Unauthorized("Token is invalid!".to_string());
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }
}

use thiserror::Error;

/// Failures while reading or writing client-side storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage write rejected for key `{key}`")]
    WriteRejected { key: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

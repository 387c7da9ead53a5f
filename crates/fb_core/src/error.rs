use thiserror::Error;

/// Failures at the JSON boundary. The models themselves never fail.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid JSON request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl CoreError {
    /// Whether the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        match self {
            CoreError::InvalidRequest(_) => true,
            CoreError::UnsupportedSchemaVersion { .. } => true,
            CoreError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

use super::config_error::ConfigError;
use super::error_code::{self, KithErrorCode};

/// Top-level error for the relationship-decay model.
#[derive(Debug, thiserror::Error)]
pub enum KithError {
    /// Caller contract violation at the boundary: unknown intent, malformed
    /// timestamp, non-finite cadence override.
    #[error("invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl KithErrorCode for KithError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type KithResult<T> = Result<T, KithError>;

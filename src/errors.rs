//! Centralized error handling.
//!
//! Provides a unified error type for the entire application.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// An environment variable holds a value the build cannot proceed with.
    #[error("{var} must be an absolute path, got '{value}'")]
    InvalidConfiguration { var: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_configuration(var: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidConfiguration {
            var,
            value: value.into(),
        }
    }
}

//! Error types for the statement printer.

use theater_core::{CoreError, ValidationError};

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Statement printer errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Statement could not be built (unknown play or play type).
    #[error(transparent)]
    Statement(#[from] CoreError),

    /// Configuration file could not be read.
    #[error("Failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the expected shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::InvalidConfig(error.to_string())
    }
}

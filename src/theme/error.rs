//! Theme engine error types

use thiserror::Error;

/// Template loading and rendering errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Template not registered
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A template file could not be loaded
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

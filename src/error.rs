//! Error handling for Sortik
//!
//! This module defines the custom error type and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for Sortik operations
#[derive(Error, Debug)]
pub enum SortikError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SortikError {
    fn from(err: serde_json::Error) -> Self {
        SortikError::Serialization(err.to_string())
    }
}

/// Result type alias for Sortik operations
pub type Result<T> = std::result::Result<T, SortikError>;

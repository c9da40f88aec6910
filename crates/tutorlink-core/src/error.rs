//! Error types for tutorlink-core

use thiserror::Error;

/// Result type alias using tutorlink-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tutorlink-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Directory backend request failed
    #[error("Directory backend error: {0}")]
    Remote(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
}

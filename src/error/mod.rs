//! Error handling for the film catalog.

use crate::models::validation::Violation;
use std::io;

/// Specialized error type for catalog and store operations
#[derive(Debug, thiserror::Error)]
pub enum FilmbaseError {
    /// Error reading or writing a store file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing stored records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A constraint violation raised by an attribute check
    #[error("{0}")]
    Validation(#[from] Violation),

    /// Error with a store key or its stored value
    #[error("Storage error for key '{key}': {message}")]
    Storage {
        /// The store key involved
        key: String,
        /// What went wrong
        message: String,
    },
}

impl FilmbaseError {
    /// Build a storage error for a given store key
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, FilmbaseError>;

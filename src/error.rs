// src/error.rs
use thiserror::Error;

/// Failures at the file boundary. Lookups never fail; they return empty results.
#[derive(Debug, Error)]
pub enum AutocompleteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;

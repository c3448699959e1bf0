//! Error types for the Bookset library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Bookset operations.
///
/// Mutations that target a stale key are not errors; they return the
/// state unchanged. Only I/O, parsing and input validation surface here.
#[derive(Debug, Error)]
pub enum BooksetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error saving or loading workflow state.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Catalogue document is unusable or incomplete.
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manual subject rejected before reaching the store.
    #[error("Invalid manual subject: {0}")]
    InvalidManualSubject(String),
}

/// Result type alias for Bookset operations.
pub type Result<T> = std::result::Result<T, BooksetError>;

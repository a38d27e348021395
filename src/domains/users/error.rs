//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the user store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened.
    #[error("Failed to open database '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare or execute.
    #[error("Database query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// The connection could not be closed cleanly.
    #[error("Failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

impl StorageError {
    /// Create an "open" error.
    pub fn open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

//! Error types for staff records
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StaffError
pub type Result<T> = std::result::Result<T, StaffError>;

/// Unified error type for staff record operations
#[derive(Debug, Error)]
pub enum StaffError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("{year} -> Illegal year number")]
    InvalidYear { year: i32 },

    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("Cannot access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("{0} -> Unknown command")]
    UnknownCommand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StaffError {
    /// Wrap an I/O failure on `path`
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StaffError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the directory, the stores, and the write-through book.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// A field violated its constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required input was absent or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An entry with this ID already exists
    #[error("Contact ID already exists: {0}")]
    DuplicateKey(String),

    /// No entry has this ID
    #[error("Contact ID not found: {0}")]
    NotFound(String),

    /// Reading or writing the storage file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContactBookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

//! Core error types for the Cadastro shared library.
//!
//! File operations and configuration handling report through these types.
//! Form validation has its own, single failure type in [`crate::validation`].

use thiserror::Error;

/// Core errors for configuration and persistence of app settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Configuration was used before being loaded
    #[error("Configuration not loaded")]
    NotLoaded,

    /// Serialization/deserialization failed
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// File operation error (wrapped)
    #[error("File operation error")]
    FileOperation(#[from] FileError),
}

/// File operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FileError {
    /// File not found
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing file
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// General I/O error
    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

impl From<serde_yaml::Error> for CoreError {
    fn from(err: serde_yaml::Error) -> Self {
        CoreError::SerializationError {
            message: err.to_string(),
        }
    }
}

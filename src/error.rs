//! Error types for `notes_rust`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for note store operations.
#[derive(Error, Debug)]
pub enum NoteError {
    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Workspace Errors ===
    /// No `.notes` workspace in the current directory.
    #[error("Not a notes workspace (run `nt init` first)")]
    NotInitialized,

    /// A workspace database already exists.
    #[error("Already initialized: {path} exists (use --force to recreate)")]
    AlreadyInitialized { path: PathBuf },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Fatal fault from the `SQLite` layer. Not retried; no recovery
    /// path is defined for a corrupted backing file.
    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The background worker lane has shut down; the operation was
    /// never applied.
    #[error("Store worker is gone")]
    WorkerGone,

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl NoteError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `NoteError`.
pub type Result<T> = std::result::Result<T, NoteError>;

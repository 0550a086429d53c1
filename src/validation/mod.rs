//! Validation helpers for `notes_rust`.
//!
//! The store accepts any text; emptiness and size limits are enforced
//! here, at the caller layer, before anything is submitted. A rejected
//! note never reaches the store.

use crate::error::ValidationError;

/// Maximum title length in bytes.
pub const MAX_TITLE_LEN: usize = 500;

/// Maximum content length in bytes (100KB).
pub const MAX_CONTENT_LEN: usize = 102_400;

/// Validates note fields.
pub struct NoteValidator;

impl NoteValidator {
    /// Validate a title/content pair and return all errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any rules are violated.
    pub fn validate(title: &str, content: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }
        if title.len() > MAX_TITLE_LEN {
            errors.push(ValidationError::new("title", "exceeds 500 characters"));
        }

        if content.trim().is_empty() {
            errors.push(ValidationError::new("content", "cannot be empty"));
        }
        if content.len() > MAX_CONTENT_LEN {
            errors.push(ValidationError::new("content", "exceeds 100KB"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

//! Error types for `bookshelf-lib`.
//!
//! The store has exactly two ways to reject an operation: the input failed
//! validation, or the requested book does not exist. Both are ordinary
//! outcomes returned to the caller, never panics.

use thiserror::Error;

/// Primary error type for bookshelf-lib operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookshelfError {
    // === Book Errors ===
    /// Book with the specified ID was not found.
    #[error("Book not found: {id}")]
    BookNotFound { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
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

impl From<ValidationError> for BookshelfError {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            reason: err.message,
        }
    }
}

impl BookshelfError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::BookNotFound { id: id.into() }
    }

    /// The offending field, for validation failures.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::BookNotFound { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound { .. })
    }
}

/// Result type using `BookshelfError`.
pub type Result<T> = std::result::Result<T, BookshelfError>;

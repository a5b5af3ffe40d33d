//! Input validation for book writes.
//!
//! Rules are checked in a fixed order and the first failure wins, so a
//! payload missing its name is reported as such even when its page counters
//! are also inconsistent.

use crate::error::ValidationError;
use crate::model::BookInput;

/// Validates create/update payloads.
pub struct BookValidator;

impl BookValidator {
    /// Validate a payload.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: `name` missing or empty, then
    /// `readPage` greater than `pageCount`.
    pub fn validate(input: &BookInput) -> Result<(), ValidationError> {
        if input.name.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationError::new("name", "required"));
        }

        if input.read_page > input.page_count {
            return Err(ValidationError::new("readPage", "exceeds pageCount"));
        }

        Ok(())
    }
}

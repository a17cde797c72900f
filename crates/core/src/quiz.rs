//! The `O`/`X` mark a daily quiz accepts as its correct answer.
//!
//! Stored as a single-character string; no other values are permitted
//! anywhere in the system.

use crate::error::CoreError;

/// The statement is true.
pub const MARK_O: &str = "O";
/// The statement is false.
pub const MARK_X: &str = "X";

/// All valid quiz answer marks.
pub const VALID_MARKS: &[&str] = &[MARK_O, MARK_X];

/// Validate that a quiz answer mark is exactly `"O"` or `"X"`.
pub fn validate_mark(mark: &str) -> Result<(), CoreError> {
    if VALID_MARKS.contains(&mark) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid quiz answer '{mark}'. Must be one of: {}",
            VALID_MARKS.join(", ")
        )))
    }
}

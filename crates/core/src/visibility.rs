//! The `Y`/`N` visibility flag used across the taxonomy.
//!
//! The flag is stored as a single-character string; no other values are
//! permitted anywhere in the system.

use crate::error::CoreError;

/// The entity is visible to end users.
pub const VISIBLE: &str = "Y";
/// The entity is hidden from end users.
pub const HIDDEN: &str = "N";

/// All valid visibility flag values.
pub const VALID_VISIBILITY: &[&str] = &[VISIBLE, HIDDEN];

/// Validate that a visibility flag is exactly `"Y"` or `"N"`.
pub fn validate_visibility(flag: &str) -> Result<(), CoreError> {
    if VALID_VISIBILITY.contains(&flag) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid visibility flag '{flag}'. Must be one of: {}",
            VALID_VISIBILITY.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_y_and_n() {
        assert!(validate_visibility("Y").is_ok());
        assert!(validate_visibility("N").is_ok());
    }

    #[test]
    fn rejects_lowercase() {
        assert!(validate_visibility("y").is_err());
        assert!(validate_visibility("n").is_err());
    }

    #[test]
    fn rejects_empty_and_other_values() {
        assert!(validate_visibility("").is_err());
        assert!(validate_visibility("YES").is_err());
        assert!(validate_visibility("0").is_err());
    }
}

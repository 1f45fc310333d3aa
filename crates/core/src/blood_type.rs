//! ABO/Rh blood group handling.
//!
//! Blood types arrive as free text from forms. They are normalized
//! (trimmed, upper-cased) and then checked against the eight groups the
//! bank tracks.

use crate::error::CoreError;

/// The eight ABO/Rh groups, in display order.
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Trim and upper-case a blood type, then verify it is a known group.
///
/// Returns the canonical spelling on success.
pub fn normalize_blood_type(raw: &str) -> Result<String, CoreError> {
    let canonical = raw.trim().to_ascii_uppercase();
    if BLOOD_GROUPS.contains(&canonical.as_str()) {
        Ok(canonical)
    } else {
        Err(CoreError::Validation(format!(
            "Invalid blood type '{}'. Must be one of: {}",
            raw.trim(),
            BLOOD_GROUPS.join(", ")
        )))
    }
}

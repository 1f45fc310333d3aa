//! Shared form validation helpers.
//!
//! Request DTOs derive [`validator::Validate`] for field-level rules; the
//! helpers here cover cross-field rules and turn `validator` output into a
//! single [`CoreError::Validation`] message.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationErrors;

use crate::error::CoreError;

/// Minimum password length enforced at registration and staff creation.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Digits with optional leading `+`, spaces, dashes, dots and parentheses.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]{5,18}[0-9]$").expect("valid phone regex"));

/// Validate a phone number loosely: 7-20 characters, mostly digits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if PHONE_RE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid phone number '{}'",
            phone.trim()
        )))
    }
}

/// Password and confirmation must match exactly.
pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), CoreError> {
    if password != confirm {
        return Err(CoreError::Validation("Passwords do not match!".into()));
    }
    Ok(())
}

/// Strip surrounding whitespace without reallocating when nothing changes.
pub fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim an optional text field; empty or whitespace-only input is absent.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|mut v| {
            trim_in_place(&mut v);
            v
        })
        .filter(|v| !v.is_empty())
}

/// Flatten `validator` field errors into one human-readable message.
///
/// Fields are reported in alphabetical order so messages are stable.
pub fn validation_message(errors: &ValidationErrors) -> CoreError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .next()
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {detail}")
        })
        .collect();
    parts.sort();
    CoreError::Validation(parts.join("; "))
}

//! Password storage and the sign-up password policy.
//!
//! Stored hashes are Argon2id PHC strings; salt and parameters live inside
//! the string, so `verify_password` needs nothing but the stored value.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use bloodbank_core::error::CoreError;
use bloodbank_core::validation::MIN_PASSWORD_LENGTH;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check a login attempt against the stored hash.
///
/// A wrong password is `Ok(false)`. `Err` means the stored value is not a
/// readable PHC string.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Password rules applied to self sign-up and staff accounts created by an
/// admin.
///
/// Rejects passwords that are too short, made only of digits, or equal to
/// the username (ignoring case).
pub fn check_password_policy(password: &str, username: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(
            "Password cannot be entirely numeric".into(),
        ));
    }
    if !username.is_empty() && password.eq_ignore_ascii_case(username.trim()) {
        return Err(CoreError::Validation(
            "Password is too similar to the username".into(),
        ));
    }
    Ok(())
}

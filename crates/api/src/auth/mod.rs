//! Credentials and tokens.
//!
//! - [`password`] -- Argon2id storage and the sign-up password policy.
//! - [`jwt`] -- access tokens and refresh-token digests.

pub mod jwt;
pub mod password;

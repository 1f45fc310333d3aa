//! Request extractors for identity and capability checks.
//!
//! - [`auth::AuthUser`] -- the caller decoded from a bearer token.
//!   `Option<AuthUser>` admits anonymous callers.
//! - [`rbac`] -- `RequireAdmin`, `RequireStaff`, `RequireNonStaff` and
//!   `RequireAuth` gates built on top of it.

pub mod auth;
pub mod rbac;

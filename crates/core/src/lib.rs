//! Domain rules for the blood bank service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and `api`
//! crates call into these modules to validate input and decide state
//! transitions before touching storage.

pub mod blood_type;
pub mod error;
pub mod inventory;
pub mod request_status;
pub mod roles;
pub mod screening;
pub mod types;
pub mod validation;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the (joined) database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity is editable

pub mod announcement;
pub mod blood_request;
pub mod campaign;
pub mod donation;
pub mod donor;
pub mod inventory;
pub mod profile;
pub mod session;
pub mod user;

//! Shared scalar aliases used across the workspace.

/// BIGSERIAL primary keys.
pub type DbId = i64;

/// SMALLINT key of the `blood_request_statuses` lookup table.
pub type StatusId = i16;

/// Every stored instant is UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Stock levels and requested units, stored as INTEGER.
pub type Units = i32;

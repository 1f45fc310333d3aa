//! Blood request model and DTOs.

use bloodbank_core::request_status::StatusId;
use bloodbank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A blood request joined with its requester's username and status name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BloodRequest {
    pub id: DbId,
    pub requester_id: DbId,
    pub requester_username: String,
    pub blood_type: String,
    pub units: i32,
    pub status_id: StatusId,
    /// `"Pending"`, `"Approved"` or `"Rejected"`.
    pub status: String,
    pub requested_at: Timestamp,
    pub approved_at: Option<Timestamp>,
}

/// DTO for submitting a request. Status always starts as Pending.
#[derive(Debug)]
pub struct CreateBloodRequest {
    pub requester_id: DbId,
    pub blood_type: String,
    pub units: i32,
}

/// Per-status request count for one requester.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

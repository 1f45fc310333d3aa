//! Donation log model and DTOs.

use bloodbank_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A donation row joined with donor and staff usernames.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub donor_id: DbId,
    pub donor_username: String,
    /// `None` once the recording staff account has been deleted.
    pub staff_id: Option<DbId>,
    pub staff_username: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    /// Server-assigned on insert.
    pub date: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for recording a donation.
#[derive(Debug)]
pub struct CreateDonation {
    pub donor_id: DbId,
    pub staff_id: Option<DbId>,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

//! Blood donor intake record.

use bloodbank_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BloodDonor {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: Option<String>,
    pub phone: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub region: String,
    pub zip_code: String,
    pub country: String,
    pub occupation: Option<String>,
    pub blood_type: String,
    pub donated_before: String,
    pub diseases: String,
    pub allergies: String,
    pub other_allergies: Option<String>,
    pub positive_test: String,
    pub cardiac: String,
    pub bleeding: String,
    pub medication: String,
    pub eligibility: bool,
    pub created_at: Timestamp,
}

/// DTO for the intake insert. Answers and blood type are already canonical;
/// `eligibility` is derived by the caller.
#[derive(Debug)]
pub struct CreateBloodDonor {
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: Option<String>,
    pub phone: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub region: String,
    pub zip_code: String,
    pub country: String,
    pub occupation: Option<String>,
    pub blood_type: String,
    pub donated_before: String,
    pub diseases: String,
    pub allergies: String,
    pub other_allergies: Option<String>,
    pub positive_test: String,
    pub cardiac: String,
    pub bleeding: String,
    pub medication: String,
    pub eligibility: bool,
}

//! Profile (role holder) model.

use bloodbank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A profile row from the `profiles` table. Exactly one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

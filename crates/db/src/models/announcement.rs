use bloodbank_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub message: String,
}

use bloodbank_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A donation drive.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCampaign {
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

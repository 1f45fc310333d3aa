//! Repository for the `campaigns` table.

use sqlx::PgPool;

use crate::models::campaign::{Campaign, CreateCampaign};

const COLUMNS: &str = "id, name, location, date, description";

pub struct CampaignRepo;

impl CampaignRepo {
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns (name, location, date, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// All campaigns, soonest date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }
}

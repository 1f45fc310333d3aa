//! Repository for the append-only `donations` table.

use bloodbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::donation::{CreateDonation, Donation};

/// Joined column list; every query aliases the donation table as `d`.
const COLUMNS: &str = "d.id, d.donor_id, donor.username AS donor_username, \
                        d.staff_id, staff.username AS staff_username, \
                        d.name, d.email, d.phone, d.date, d.created_at";

const JOINS: &str = "JOIN users donor ON donor.id = d.donor_id \
                     LEFT JOIN users staff ON staff.id = d.staff_id";

/// Provides append and read operations. There is no update or delete.
pub struct DonationRepo;

impl DonationRepo {
    /// Append a donation. The date is assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateDonation) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "WITH d AS (
                INSERT INTO donations (donor_id, staff_id, name, email, phone)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
             )
             SELECT {COLUMNS} FROM d {JOINS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(input.donor_id)
            .bind(input.staff_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Donations given by one user, in insertion order.
    pub async fn list_for_donor(
        pool: &PgPool,
        donor_id: DbId,
    ) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM donations d {JOINS} WHERE d.donor_id = $1 ORDER BY d.id ASC"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(donor_id)
            .fetch_all(pool)
            .await
    }

    /// Every donation, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations d {JOINS} ORDER BY d.id ASC");
        sqlx::query_as::<_, Donation>(&query).fetch_all(pool).await
    }

    /// Count donations, optionally restricted to one donor.
    pub async fn count(pool: &PgPool, donor_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM donations WHERE $1::BIGINT IS NULL OR donor_id = $1",
        )
        .bind(donor_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

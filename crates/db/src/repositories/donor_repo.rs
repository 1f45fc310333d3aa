//! Repository for the `blood_donors` intake table.

use bloodbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::donor::{BloodDonor, CreateBloodDonor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, first_name, last_name, dob, email, phone, \
                        address1, address2, city, region, zip_code, country, occupation, \
                        blood_type, donated_before, diseases, allergies, other_allergies, \
                        positive_test, cardiac, bleeding, medication, eligibility, created_at";

pub struct DonorRepo;

impl DonorRepo {
    /// Store an intake form.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBloodDonor,
    ) -> Result<BloodDonor, sqlx::Error> {
        let query = format!(
            "INSERT INTO blood_donors (
                user_id, first_name, last_name, dob, email, phone,
                address1, address2, city, region, zip_code, country, occupation,
                blood_type, donated_before, diseases, allergies, other_allergies,
                positive_test, cardiac, bleeding, medication, eligibility
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BloodDonor>(&query)
            .bind(input.user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.dob)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address1)
            .bind(&input.address2)
            .bind(&input.city)
            .bind(&input.region)
            .bind(&input.zip_code)
            .bind(&input.country)
            .bind(&input.occupation)
            .bind(&input.blood_type)
            .bind(&input.donated_before)
            .bind(&input.diseases)
            .bind(&input.allergies)
            .bind(&input.other_allergies)
            .bind(&input.positive_test)
            .bind(&input.cardiac)
            .bind(&input.bleeding)
            .bind(&input.medication)
            .bind(input.eligibility)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BloodDonor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_donors WHERE id = $1");
        sqlx::query_as::<_, BloodDonor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All intake records, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BloodDonor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_donors ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BloodDonor>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blood_donors")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

//! Repository for the `blood_inventory` table.

use bloodbank_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::inventory::{InventoryEntry, UpdateInventory, UpsertInventory};

/// Column list shared across queries. `updated_at` doubles as `last_updated`.
const COLUMNS: &str = "id, blood_type, quantity, updated_at AS last_updated";

/// Provides stock-level operations. Staff supply new quantities directly;
/// only the approval workflow subtracts.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Create or overwrite the single entry for a blood type.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertInventory,
    ) -> Result<InventoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO blood_inventory (blood_type, quantity)
             VALUES ($1, $2)
             ON CONFLICT (blood_type) DO UPDATE SET quantity = EXCLUDED.quantity
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryEntry>(&query)
            .bind(&input.blood_type)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InventoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_inventory WHERE id = $1");
        sqlx::query_as::<_, InventoryEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the entry for a blood type.
    pub async fn find_by_blood_type(
        pool: &PgPool,
        blood_type: &str,
    ) -> Result<Option<InventoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_inventory WHERE blood_type = $1");
        sqlx::query_as::<_, InventoryEntry>(&query)
            .bind(blood_type)
            .fetch_optional(pool)
            .await
    }

    /// List all entries ordered by blood type.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<InventoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_inventory ORDER BY blood_type ASC");
        sqlx::query_as::<_, InventoryEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Edit an entry by id. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventory,
    ) -> Result<Option<InventoryEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE blood_inventory SET
                blood_type = COALESCE($2, blood_type),
                quantity = COALESCE($3, quantity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryEntry>(&query)
            .bind(id)
            .bind(&input.blood_type)
            .bind(input.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Sum of all units on hand.
    pub async fn total_units(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM blood_inventory")
                .fetch_one(pool)
                .await?;
        Ok(total)
    }

    /// Lock the entry for a blood type for the rest of the enclosing transaction.
    pub async fn lock_by_blood_type(
        conn: &mut PgConnection,
        blood_type: &str,
    ) -> Result<Option<InventoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blood_inventory WHERE blood_type = $1 FOR UPDATE"
        );
        sqlx::query_as::<_, InventoryEntry>(&query)
            .bind(blood_type)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Overwrite the quantity of a (locked) entry inside a transaction.
    pub async fn set_quantity(
        conn: &mut PgConnection,
        id: DbId,
        quantity: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE blood_inventory SET quantity = $2 WHERE id = $1")
            .bind(id)
            .bind(quantity)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

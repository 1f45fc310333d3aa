//! Blood inventory entry model and DTOs.

use bloodbank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One row of `blood_inventory`: the stock level of a single blood type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryEntry {
    pub id: DbId,
    pub blood_type: String,
    pub quantity: i32,
    /// Refreshed by trigger on every mutation.
    pub last_updated: Timestamp,
}

/// DTO for `upsert`. `blood_type` must already be normalized.
#[derive(Debug)]
pub struct UpsertInventory {
    pub blood_type: String,
    pub quantity: i32,
}

/// DTO for editing an entry by id.
#[derive(Debug, Default)]
pub struct UpdateInventory {
    pub blood_type: Option<String>,
    pub quantity: Option<i32>,
}

//! Handlers for the blood inventory (staff management and public availability).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::blood_type::normalize_blood_type;
use bloodbank_core::error::CoreError;
use bloodbank_core::inventory::validate_quantity;
use bloodbank_core::types::DbId;
use bloodbank_db::models::inventory::{InventoryEntry, UpdateInventory, UpsertInventory};
use bloodbank_db::repositories::InventoryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /staff-blood-inventory/add`.
#[derive(Debug, Deserialize)]
pub struct AddInventoryRequest {
    pub blood_type: String,
    pub quantity: i32,
}

/// Request body for `PUT /staff-blood-inventory/edit/{id}`.
#[derive(Debug, Deserialize)]
pub struct EditInventoryRequest {
    pub blood_type: Option<String>,
    pub quantity: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/staff-blood-inventory
pub async fn list_inventory(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<InventoryEntry>>>> {
    let entries = InventoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/staff-blood-inventory/add
///
/// Create or overwrite the entry for a blood type. Returns 201 in both cases
/// since the caller asked to set a stock level, not to append a row.
pub async fn add_inventory(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<AddInventoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<InventoryEntry>>)> {
    let blood_type = normalize_blood_type(&input.blood_type)?;
    validate_quantity(input.quantity)?;

    let entry = InventoryRepo::upsert(
        &state.pool,
        &UpsertInventory {
            blood_type,
            quantity: input.quantity,
        },
    )
    .await?;

    tracing::info!(
        user_id = staff.user_id,
        blood_type = %entry.blood_type,
        quantity = entry.quantity,
        "Inventory stock set"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/staff-blood-inventory/edit/{id}
pub async fn edit_inventory(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<EditInventoryRequest>,
) -> AppResult<Json<DataResponse<InventoryEntry>>> {
    let blood_type = input
        .blood_type
        .as_deref()
        .map(normalize_blood_type)
        .transpose()?;
    if let Some(quantity) = input.quantity {
        validate_quantity(quantity)?;
    }

    let entry = InventoryRepo::update(
        &state.pool,
        id,
        &UpdateInventory {
            blood_type,
            quantity: input.quantity,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "InventoryEntry",
        id,
    }))?;

    tracing::info!(
        user_id = staff.user_id,
        inventory_id = id,
        blood_type = %entry.blood_type,
        quantity = entry.quantity,
        "Inventory entry edited"
    );
    Ok(Json(DataResponse { data: entry }))
}

/// GET /api/v1/available-blood
///
/// Public read of current stock, ordered by blood type.
pub async fn available_blood(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<InventoryEntry>>>> {
    let entries = InventoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

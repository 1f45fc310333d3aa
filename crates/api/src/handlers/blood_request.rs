//! Handlers for blood requests and the staff approval workflow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::blood_type::normalize_blood_type;
use bloodbank_core::inventory::validate_units;
use bloodbank_core::request_status::RequestStatus;
use bloodbank_core::types::DbId;
use bloodbank_db::models::blood_request::{BloodRequest, CreateBloodRequest};
use bloodbank_db::repositories::BloodRequestRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /request-blood`.
///
/// Requester and status are never taken from the client; unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct RequestBloodRequest {
    pub blood_type: String,
    pub units: i32,
}

// ---------------------------------------------------------------------------
// Requester handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/request-blood
pub async fn request_blood(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<RequestBloodRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BloodRequest>>)> {
    let blood_type = normalize_blood_type(&input.blood_type)?;
    validate_units(input.units)?;

    let request = BloodRequestRepo::create(
        &state.pool,
        &CreateBloodRequest {
            requester_id: user.user_id,
            blood_type,
            units: input.units,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        request_id = request.id,
        blood_type = %request.blood_type,
        units = request.units,
        "Blood request submitted"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/my-requests
///
/// The caller's requests in every status, newest first.
pub async fn my_requests(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<BloodRequest>>>> {
    let requests = BloodRequestRepo::list_for_requester(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

// ---------------------------------------------------------------------------
// Staff handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/manage-requests
pub async fn manage_requests(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<BloodRequest>>>> {
    let requests = BloodRequestRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/manage-requests/pending
///
/// The work queue: pending requests, oldest first.
pub async fn pending_requests(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<BloodRequest>>>> {
    let requests = BloodRequestRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/approve-request/{id}
///
/// Pending -> Approved. Stamps `approved_at` and, unless disabled in config,
/// takes the units out of inventory in the same transaction.
pub async fn approve_request(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BloodRequest>>> {
    let request = BloodRequestRepo::decide(
        &state.pool,
        id,
        RequestStatus::Approved,
        state.approval_adjusts_inventory(),
    )
    .await?;

    tracing::info!(
        user_id = staff.user_id,
        request_id = id,
        blood_type = %request.blood_type,
        units = request.units,
        "Blood request approved"
    );
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/reject-request/{id}
///
/// Pending -> Rejected. Inventory is untouched.
pub async fn reject_request(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BloodRequest>>> {
    let request = BloodRequestRepo::decide(&state.pool, id, RequestStatus::Rejected, false).await?;

    tracing::info!(user_id = staff.user_id, request_id = id, "Blood request rejected");
    Ok(Json(DataResponse { data: request }))
}

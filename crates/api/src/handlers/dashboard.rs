//! Role-gated summary views.

use axum::extract::State;
use axum::Json;
use bloodbank_db::models::blood_request::StatusCount;
use bloodbank_db::repositories::{BloodRequestRepo, DonationRepo, DonorRepo, InventoryRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireNonStaff, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Summary for an ordinary user.
#[derive(Debug, Serialize)]
pub struct UserDashboard {
    /// The caller's requests, counted per status.
    pub requests: Vec<StatusCount>,
    pub donations: i64,
}

/// Summary for staff.
#[derive(Debug, Serialize)]
pub struct StaffDashboard {
    pub pending_requests: i64,
    /// Units on hand across all blood types.
    pub total_units: i64,
    pub donations: i64,
    pub donors: i64,
}

/// GET /api/v1/user-dashboard
///
/// Staff accounts are turned away with "Access denied!".
pub async fn user_dashboard(
    State(state): State<AppState>,
    RequireNonStaff(user): RequireNonStaff,
) -> AppResult<Json<DataResponse<UserDashboard>>> {
    let requests =
        BloodRequestRepo::count_by_status_for_requester(&state.pool, user.user_id).await?;
    let donations = DonationRepo::count(&state.pool, Some(user.user_id)).await?;

    Ok(Json(DataResponse {
        data: UserDashboard {
            requests,
            donations,
        },
    }))
}

/// GET /api/v1/staff-dashboard
pub async fn staff_dashboard(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<StaffDashboard>>> {
    let pending_requests = BloodRequestRepo::count_pending(&state.pool).await?;
    let total_units = InventoryRepo::total_units(&state.pool).await?;
    let donations = DonationRepo::count(&state.pool, None).await?;
    let donors = DonorRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: StaffDashboard {
            pending_requests,
            total_units,
            donations,
            donors,
        },
    }))
}

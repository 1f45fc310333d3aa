//! Staff-facing user listing.

use axum::extract::State;
use axum::Json;
use bloodbank_db::models::user::UserResponse;
use bloodbank_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/manage-users
///
/// Every account ordered by id, with its profile role.
pub async fn manage_users(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

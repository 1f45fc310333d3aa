//! Handlers for the `/admin` resource (staff accounts, user flags, roles).
//!
//! All handlers require the superuser capability via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::error::CoreError;
use bloodbank_core::roles::validate_role;
use bloodbank_core::types::DbId;
use bloodbank_core::validation::{trim_in_place, validation_message};
use bloodbank_db::models::profile::Profile;
use bloodbank_db::models::user::{UpdateUser, UserResponse};
use bloodbank_db::repositories::{ProfileRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::{create_account, RegisterRequest};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 150, message = "must not be blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 150, message = "must not be blank"))]
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    fn normalize(&mut self) {
        for field in [&mut self.email, &mut self.first_name, &mut self.last_name] {
            if let Some(value) = field.as_mut() {
                trim_in_place(value);
            }
        }
    }
}

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/staff
///
/// Create a staff account from the registration form. The profile is created
/// with role `staff` in the same transaction as the account.
pub async fn create_staff(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let user = create_account(&state, input, true).await?;

    tracing::info!(
        admin_id = admin.user_id,
        user_id = user.id,
        username = %user.username,
        "Staff account created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/admin/staff
pub async fn list_staff(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let staff = UserRepo::list_staff(&state.pool).await?;
    Ok(Json(DataResponse { data: staff }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Update names, email and capability flags (not password). Moving the
/// account to another capability level moves its role tag too.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input.normalize();
    input.validate().map_err(|e| validation_message(&e))?;

    let update_dto = UpdateUser {
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        is_staff: input.is_staff,
        is_superuser: input.is_superuser,
        is_active: input.is_active,
    };

    UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let user = UserRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(admin_id = admin.user_id, user_id = id, "User updated");
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/admin/users/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let role = input.role.trim().to_ascii_lowercase();
    validate_role(&role)?;

    let profile = ProfileRepo::set_role(&state.pool, id, &role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(admin_id = admin.user_id, user_id = id, role = %role, "Role changed");
    Ok(Json(DataResponse { data: profile }))
}

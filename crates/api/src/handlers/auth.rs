//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::error::CoreError;
use bloodbank_core::roles::dashboard_path;
use bloodbank_core::types::DbId;
use bloodbank_core::validation::{trim_in_place, validate_password_confirmation, validation_message};
use bloodbank_db::models::session::NewSession;
use bloodbank_db::models::user::{CreateUser, User, UserResponse};
use bloodbank_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, TokenSubject,
};
use crate::auth::password::{check_password_policy, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /admin/staff`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 150, message = "is required"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 150, message = "must be 1 to 150 characters"))]
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Trim the text fields so length rules apply to the stored values.
    /// Passwords are left exactly as typed.
    fn normalize(&mut self) {
        trim_in_place(&mut self.first_name);
        trim_in_place(&mut self.last_name);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.username);
    }
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Landing page for this identity.
    pub dashboard: &'static str,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Public sign-up. Creates a non-staff user with the default profile.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let user = create_account(&state, input, false).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens
/// and the dashboard the client should land on.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %input.username, "Failed login attempt");
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let role = ProfileRepo::resolve_role(&state.pool, user.id).await?;

    let response = create_auth_response(&state, &user, &role).await?;
    tracing::info!(user_id = user.id, role = %role, "User logged in");
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Trade a refresh token for a new token pair. The presented token is spent
/// whether or not the account is still allowed in.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::redeem(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let role = ProfileRepo::resolve_role(&state.pool, user.id).await?;
    let response = create_auth_response(&state, &user, &role).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_response_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Validate a registration form and create the account.
///
/// Shared by public sign-up and admin staff creation; the only difference is
/// the staff capability flag.
pub(crate) async fn create_account(
    state: &AppState,
    mut input: RegisterRequest,
    is_staff: bool,
) -> AppResult<UserResponse> {
    validate_password_confirmation(&input.password, &input.confirm_password)?;
    input.normalize();
    input.validate().map_err(|e| validation_message(&e))?;
    check_password_policy(&input.password, &input.username)?;

    let RegisterRequest {
        first_name,
        last_name,
        email,
        username,
        password,
        ..
    } = input;

    if UserRepo::username_exists(&state.pool, &username).await? {
        return Err(AppError::Core(CoreError::Validation(
            "Username already exists!".into(),
        )));
    }
    if UserRepo::email_exists(&state.pool, &email).await? {
        return Err(AppError::Core(CoreError::Validation(
            "Email already exists!".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username,
        email,
        first_name,
        last_name,
        password_hash,
        is_staff,
        is_superuser: false,
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    UserRepo::find_response_by_id(&state.pool, user.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }))
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    user: &User,
    role: &str,
) -> AppResult<AuthResponse> {
    let subject = TokenSubject {
        user_id: user.id,
        role,
        is_staff: user.is_staff,
        is_superuser: user.is_superuser,
    };
    let access_token = generate_access_token(subject, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = NewSession {
        user_id: user.id,
        refresh_token_hash: refresh_hash,
        expires_at,
    };
    SessionRepo::open(&state.pool, &session_input).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        dashboard: dashboard_path(user.is_staff, user.is_superuser),
        user: UserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: role.to_string(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        },
    })
}

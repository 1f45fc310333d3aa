//! Handlers for the donation log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::error::CoreError;
use bloodbank_core::types::DbId;
use bloodbank_core::validation::{blank_to_none, trim_in_place, validate_phone, validation_message};
use bloodbank_db::models::donation::{CreateDonation, Donation};
use bloodbank_db::repositories::{DonationRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /staff/donated-persons`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordDonationRequest {
    /// The donating user.
    pub donor_id: DbId,
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub phone: String,
}

impl RecordDonationRequest {
    fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.phone);
        self.email = blank_to_none(self.email.take());
    }
}

/// POST /api/v1/staff/donated-persons
///
/// Staff only. The recording staff member and the date are filled in by
/// the server.
pub async fn record_donation(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(mut input): Json<RecordDonationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Donation>>)> {
    input.normalize();
    input.validate().map_err(|e| validation_message(&e))?;
    validate_phone(&input.phone)?;

    UserRepo::find_by_id(&state.pool, input.donor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.donor_id,
        }))?;

    let donation = DonationRepo::create(
        &state.pool,
        &CreateDonation {
            donor_id: input.donor_id,
            staff_id: Some(staff.user_id),
            name: input.name,
            email: input.email,
            phone: input.phone,
        },
    )
    .await?;

    tracing::info!(
        user_id = staff.user_id,
        donation_id = donation.id,
        donor_id = donation.donor_id,
        "Donation recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: donation })))
}

/// GET /api/v1/staff/donated-persons
///
/// Staff only. Every donation in the order it was recorded.
pub async fn donated_persons(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<Donation>>>> {
    let donations = DonationRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: donations }))
}

/// GET /api/v1/user/my-donations
pub async fn my_donations(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Donation>>>> {
    let donations = DonationRepo::list_for_donor(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: donations }))
}

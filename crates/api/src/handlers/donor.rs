//! Donor intake: the public "donate blood" form and the staff donor list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::blood_type::normalize_blood_type;
use bloodbank_core::error::CoreError;
use bloodbank_core::screening::{normalize_answer, ScreeningAnswers};
use bloodbank_core::validation::{blank_to_none, trim_in_place, validate_phone, validation_message};
use bloodbank_db::models::donor::{BloodDonor, CreateBloodDonor};
use bloodbank_db::repositories::DonorRepo;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /donate-blood`.
#[derive(Debug, Deserialize, Validate)]
pub struct DonorIntakeRequest {
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub last_name: String,
    pub dob: NaiveDate,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub phone: String,
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub address1: String,
    pub address2: Option<String>,
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub region: String,
    #[validate(length(min = 1, max = 20, message = "is required"))]
    pub zip_code: String,
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub country: String,
    pub occupation: Option<String>,
    pub blood_type: String,
    pub donated_before: String,
    pub diseases: String,
    pub allergies: String,
    pub other_allergies: Option<String>,
    pub positive_test: String,
    pub cardiac: String,
    pub bleeding: String,
    pub medication: String,
}

impl DonorIntakeRequest {
    /// Trim free text and treat empty optional fields as absent, so that
    /// validation sees what will be stored.
    fn normalize(&mut self) {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.phone,
            &mut self.address1,
            &mut self.city,
            &mut self.region,
            &mut self.zip_code,
            &mut self.country,
        ] {
            trim_in_place(field);
        }
        for field in [
            &mut self.email,
            &mut self.address2,
            &mut self.occupation,
            &mut self.other_allergies,
        ] {
            *field = blank_to_none(field.take());
        }
    }
}

/// POST /api/v1/donate-blood
///
/// Public. Links the record to the caller when a valid bearer token is sent.
/// Eligibility is derived from the screening answers.
pub async fn donate_blood(
    State(state): State<AppState>,
    auth_user: Option<AuthUser>,
    Json(mut input): Json<DonorIntakeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BloodDonor>>)> {
    input.normalize();
    input.validate().map_err(|e| validation_message(&e))?;
    validate_phone(&input.phone)?;
    if input.dob >= Utc::now().date_naive() {
        return Err(CoreError::Validation("dob must be in the past".into()).into());
    }

    let blood_type = normalize_blood_type(&input.blood_type)?;
    let answers = ScreeningAnswers {
        donated_before: normalize_answer("donated_before", &input.donated_before)?,
        diseases: normalize_answer("diseases", &input.diseases)?,
        allergies: normalize_answer("allergies", &input.allergies)?,
        positive_test: normalize_answer("positive_test", &input.positive_test)?,
        cardiac: normalize_answer("cardiac", &input.cardiac)?,
        bleeding: normalize_answer("bleeding", &input.bleeding)?,
        medication: normalize_answer("medication", &input.medication)?,
    };
    let eligibility = answers.is_eligible();

    let create_dto = CreateBloodDonor {
        user_id: auth_user.as_ref().map(|u| u.user_id),
        first_name: input.first_name,
        last_name: input.last_name,
        dob: input.dob,
        email: input.email,
        phone: input.phone,
        address1: input.address1,
        address2: input.address2,
        city: input.city,
        region: input.region,
        zip_code: input.zip_code,
        country: input.country,
        occupation: input.occupation,
        blood_type,
        donated_before: answers.donated_before.to_string(),
        diseases: answers.diseases.to_string(),
        allergies: answers.allergies.to_string(),
        other_allergies: input.other_allergies,
        positive_test: answers.positive_test.to_string(),
        cardiac: answers.cardiac.to_string(),
        bleeding: answers.bleeding.to_string(),
        medication: answers.medication.to_string(),
        eligibility,
    };
    let donor = DonorRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(
        donor_id = donor.id,
        blood_type = %donor.blood_type,
        eligibility,
        disqualifiers = ?answers.disqualifiers(),
        "Donor intake recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: donor })))
}

/// GET /api/v1/donors
///
/// Staff only. Newest intake first.
pub async fn donor_list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<BloodDonor>>>> {
    let donors = DonorRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: donors }))
}

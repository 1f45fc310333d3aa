//! Public boards: announcements and donation campaigns.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bloodbank_core::error::CoreError;
use bloodbank_db::models::announcement::{Announcement, CreateAnnouncement};
use bloodbank_db::models::campaign::{Campaign, CreateCampaign};
use bloodbank_db::repositories::{AnnouncementRepo, CampaignRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Announcement>>>> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: announcements,
    }))
}

/// POST /api/v1/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<DataResponse<Announcement>>)> {
    require_text("title", &input.title)?;
    require_text("message", &input.message)?;

    let announcement = AnnouncementRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = staff.user_id,
        announcement_id = announcement.id,
        "Announcement posted"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: announcement })))
}

/// GET /api/v1/campaigns
///
/// Ordered by campaign date, soonest first.
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Campaign>>>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: campaigns }))
}

/// POST /api/v1/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateCampaign>,
) -> AppResult<(StatusCode, Json<DataResponse<Campaign>>)> {
    require_text("name", &input.name)?;
    require_text("location", &input.location)?;

    let campaign = CampaignRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = staff.user_id,
        campaign_id = campaign.id,
        date = %campaign.date,
        "Campaign created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: campaign })))
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field}: is required")));
    }
    Ok(())
}

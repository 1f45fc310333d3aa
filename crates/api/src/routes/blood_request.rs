//! Route definitions for blood requests and approvals.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blood_request;
use crate::state::AppState;

/// ```text
/// POST /request-blood             -> request_blood
/// GET  /my-requests               -> my_requests
/// GET  /manage-requests           -> manage_requests (staff)
/// GET  /manage-requests/pending   -> pending_requests (staff)
/// POST /approve-request/{id}      -> approve_request (staff)
/// POST /reject-request/{id}       -> reject_request (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request-blood", post(blood_request::request_blood))
        .route("/my-requests", get(blood_request::my_requests))
        .route("/manage-requests", get(blood_request::manage_requests))
        .route(
            "/manage-requests/pending",
            get(blood_request::pending_requests),
        )
        .route(
            "/approve-request/{id}",
            post(blood_request::approve_request),
        )
        .route("/reject-request/{id}", post(blood_request::reject_request))
}

//! Route definitions for the donation log.

use axum::routing::get;
use axum::Router;

use crate::handlers::donation;
use crate::state::AppState;

/// ```text
/// GET  /staff/donated-persons  -> donated_persons (staff)
/// POST /staff/donated-persons  -> record_donation (staff)
/// GET  /user/my-donations      -> my_donations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/staff/donated-persons",
            get(donation::donated_persons).post(donation::record_donation),
        )
        .route("/user/my-donations", get(donation::my_donations))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// Load balancers key off the status code, so an unreachable database
/// reports 503 rather than a 200 with a degraded body.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match bloodbank_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok", "up"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    (
        code,
        Json(HealthResponse {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            status,
            database,
        }),
    )
}

/// Root-level routes that sit outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

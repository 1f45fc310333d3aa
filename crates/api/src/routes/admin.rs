//! Route definitions for the `/admin` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Superuser only.
///
/// ```text
/// POST /staff            -> create_staff
/// GET  /staff            -> list_staff
/// PUT  /users/{id}       -> update_user
/// PUT  /users/{id}/role  -> set_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/staff",
            get(admin::list_staff).post(admin::create_staff),
        )
        .route("/users/{id}", put(admin::update_user))
        .route("/users/{id}/role", put(admin::set_role))
}

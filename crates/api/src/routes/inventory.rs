//! Route definitions for blood inventory.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// ```text
/// GET  /staff-blood-inventory              -> list_inventory (staff)
/// POST /staff-blood-inventory/add          -> add_inventory (staff)
/// PUT  /staff-blood-inventory/edit/{id}    -> edit_inventory (staff)
/// GET  /available-blood                    -> available_blood (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff-blood-inventory", get(inventory::list_inventory))
        .route("/staff-blood-inventory/add", post(inventory::add_inventory))
        .route(
            "/staff-blood-inventory/edit/{id}",
            put(inventory::edit_inventory),
        )
        .route("/available-blood", get(inventory::available_blood))
}

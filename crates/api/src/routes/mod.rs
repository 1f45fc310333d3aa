pub mod admin;
pub mod auth;
pub mod blood_request;
pub mod donation;
pub mod health;
pub mod inventory;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
/// /auth/me                            current user (requires auth)
///
/// /admin/staff                        list, create staff (superuser)
/// /admin/users/{id}                   update user (superuser)
/// /admin/users/{id}/role              set role (superuser)
///
/// /user-dashboard                     non-staff summary
/// /staff-dashboard                    staff summary
/// /manage-users                       list users (staff)
///
/// /donate-blood                       donor intake (public, POST)
/// /donors                             donor list (staff)
///
/// /announcements                      list (public), create (staff)
/// /campaigns                          list (public), create (staff)
///
/// /staff-blood-inventory              list (staff)
/// /staff-blood-inventory/add          upsert (staff, POST)
/// /staff-blood-inventory/edit/{id}    edit (staff, PUT)
/// /available-blood                    public stock
///
/// /request-blood                      submit (requires auth, POST)
/// /my-requests                        own requests (requires auth)
/// /manage-requests                    all requests (staff)
/// /manage-requests/pending            pending queue (staff)
/// /approve-request/{id}               approve (staff, POST)
/// /reject-request/{id}                reject (staff, POST)
///
/// /staff/donated-persons              list, record (staff)
/// /user/my-donations                  own donations (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .route("/user-dashboard", get(handlers::dashboard::user_dashboard))
        .route("/staff-dashboard", get(handlers::dashboard::staff_dashboard))
        .route("/manage-users", get(handlers::users::manage_users))
        .route("/donate-blood", post(handlers::donor::donate_blood))
        .route("/donors", get(handlers::donor::donor_list))
        .route(
            "/announcements",
            get(handlers::board::list_announcements).post(handlers::board::create_announcement),
        )
        .route(
            "/campaigns",
            get(handlers::board::list_campaigns).post(handlers::board::create_campaign),
        )
        .merge(inventory::router())
        .merge(blood_request::router())
        .merge(donation::router())
}

//! Capability gates layered on top of [`AuthUser`].
//!
//! A gate first authenticates (401 on a missing or bad token) and then checks
//! the caller's capability flags (403 with the gate's message).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bloodbank_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

macro_rules! capability_gate {
    ($(#[$meta:meta])* $name:ident, |$user:ident| $allowed:expr, $denied:literal) => {
        $(#[$meta])*
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let $user =
                    <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
                        .await?;
                if !$allowed {
                    tracing::debug!(
                        user_id = $user.user_id,
                        gate = stringify!($name),
                        "Capability check failed"
                    );
                    return Err(AppError::Core(CoreError::Forbidden($denied.into())));
                }
                Ok($name($user))
            }
        }
    };
}

capability_gate!(
    /// Superusers only. Guards the `/admin` account management routes.
    RequireAdmin,
    |user| user.is_superuser,
    "Admin access required"
);

capability_gate!(
    /// Staff desk: inventory, request decisions, donations, donor list.
    /// Superusers pass as well.
    RequireStaff,
    |user| user.has_staff_access(),
    "Staff access required"
);

capability_gate!(
    /// Ordinary members only, e.g. the personal dashboard. Staff are turned
    /// away to their own dashboard.
    RequireNonStaff,
    |user| !user.has_staff_access(),
    "Access denied!"
);

capability_gate!(
    /// Any signed-in account.
    RequireAuth,
    |user| true,
    "Access denied!"
);

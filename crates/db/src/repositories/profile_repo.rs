//! Repository for the `profiles` table.
//!
//! Profiles are never created directly by handlers. [`ProfileRepo::sync_for_user`]
//! is the post-write hook that [`crate::repositories::UserRepo`] runs inside
//! its own transaction on every insert and update of a user.

use bloodbank_core::roles::DEFAULT_ROLE;
use bloodbank_core::types::DbId;
use sqlx::postgres::PgExecutor;
use sqlx::{PgConnection, PgPool};

use crate::models::profile::Profile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, role, created_at, updated_at";

/// Provides profile sync and role management.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Ensure the user has exactly one profile.
    ///
    /// Creates it with `role_if_missing` when absent; otherwise re-saves the
    /// existing row (refreshing `updated_at`) and leaves its role untouched.
    pub async fn sync_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
        role_if_missing: &str,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, role)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(role_if_missing)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find the profile belonging to a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Change a user's role. `role` must already be validated.
    ///
    /// Accepts the pool or an open transaction. Returns `None` if the user
    /// has no profile (i.e. does not exist).
    pub async fn set_role<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
        role: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("UPDATE profiles SET role = $2 WHERE user_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(role)
            .fetch_optional(executor)
            .await
    }

    /// Resolve a user's role name, falling back to the default role.
    pub async fn resolve_role(pool: &PgPool, user_id: DbId) -> Result<String, sqlx::Error> {
        Ok(Self::find_by_user_id(pool, user_id)
            .await?
            .map(|p| p.role)
            .unwrap_or_else(|| DEFAULT_ROLE.to_string()))
    }
}

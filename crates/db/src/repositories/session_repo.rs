//! Refresh-token sessions in `user_sessions`.

use bloodbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{NewSession, RefreshSession};

const COLUMNS: &str = "id, user_id, expires_at, revoked_at, created_at";

pub struct SessionRepo;

impl SessionRepo {
    /// Record a freshly issued refresh token.
    pub async fn open(pool: &PgPool, input: &NewSession) -> Result<RefreshSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Spend a refresh token, returning the session it belonged to.
    ///
    /// The revoke and the lookup are one statement, so two concurrent
    /// refreshes with the same token cannot both succeed. Unknown, expired
    /// and already spent tokens all yield `None`.
    pub async fn redeem(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<Option<RefreshSession>, sqlx::Error> {
        let query = format!(
            "UPDATE user_sessions SET revoked_at = NOW()
             WHERE refresh_token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(refresh_token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke every live session of a user (logout). Returns how many were live.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET revoked_at = NOW()
             WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

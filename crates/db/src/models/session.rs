use bloodbank_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An issued refresh token. Only the SHA-256 digest of the token is kept.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshSession {
    pub id: DbId,
    pub user_id: DbId,
    pub expires_at: Timestamp,
    /// Set when the token is redeemed or the user logs out.
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

pub struct NewSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}

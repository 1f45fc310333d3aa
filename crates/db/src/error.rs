//! Error type for repository workflows that mix domain rules with storage.
//!
//! Plain CRUD methods return `sqlx::Error` directly. Multi-step transactional
//! methods (approval, profile sync) can also fail on a domain rule, so they
//! return [`RepoError`].

use bloodbank_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

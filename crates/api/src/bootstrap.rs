//! Startup provisioning of the superuser account.

use bloodbank_db::models::user::CreateUser;
use bloodbank_db::repositories::UserRepo;
use bloodbank_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the configured superuser if no account with that username exists.
///
/// Returns `true` when an account was created. An existing account is left
/// untouched, including its password.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<bool> {
    if UserRepo::username_exists(pool, &admin.username).await? {
        tracing::debug!(username = %admin.username, "Admin account already present");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            first_name: String::new(),
            last_name: String::new(),
            password_hash,
            is_staff: true,
            is_superuser: true,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Admin account created");
    Ok(true)
}

//! Repository for the `users` table.

use bloodbank_core::roles::role_for_capabilities;
use bloodbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User, UserResponse};
use crate::repositories::ProfileRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
                        is_staff, is_superuser, is_active, last_login_at, created_at, updated_at";

/// Safe columns joined with the profile role, for [`UserResponse`].
const RESPONSE_SELECT: &str = "\
    SELECT u.id, u.username, u.email, u.first_name, u.last_name, \
           COALESCE(p.role, 'user') AS role, \
           u.is_staff, u.is_superuser, u.is_active, u.last_login_at, u.created_at \
    FROM users u \
    LEFT JOIN profiles p ON p.user_id = u.id";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user and its profile in one transaction.
    ///
    /// The profile role follows the capability flags, so a staff or superuser
    /// account never exists with a plain `user` tag.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users
                (username, email, first_name, last_name, password_hash, is_staff, is_superuser)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.is_staff)
            .bind(input.is_superuser)
            .fetch_one(&mut *tx)
            .await?;

        let role = role_for_capabilities(user.is_staff, user.is_superuser);
        ProfileRepo::sync_for_user(&mut tx, user.id, role).await?;
        tx.commit().await?;

        tracing::debug!(user_id = user.id, role, "User created with profile");
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a username is taken.
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Check whether an email is taken (case-insensitive).
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE lower(email) = lower($1))")
                .bind(email)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find the safe response view of one user.
    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserResponse>, sqlx::Error> {
        let query = format!("{RESPONSE_SELECT} WHERE u.id = $1");
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!("{RESPONSE_SELECT} ORDER BY u.id ASC");
        sqlx::query_as::<_, UserResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only accounts carrying the staff capability.
    pub async fn list_staff(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!("{RESPONSE_SELECT} WHERE u.is_staff = true ORDER BY u.id ASC");
        sqlx::query_as::<_, UserResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied, then the
    /// profile hook re-saves (or recreates) the user's profile.
    ///
    /// When the change moves the account to another capability level
    /// (user, staff, superuser) the profile role is moved with it in the
    /// same transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let before: Option<(bool, bool)> =
            sqlx::query_as("SELECT is_staff, is_superuser FROM users WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((was_staff, was_superuser)) = before else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                is_staff = COALESCE($5, is_staff),
                is_superuser = COALESCE($6, is_superuser),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.is_staff)
            .bind(input.is_superuser)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        let old_role = role_for_capabilities(was_staff, was_superuser);
        let new_role = role_for_capabilities(user.is_staff, user.is_superuser);
        ProfileRepo::sync_for_user(&mut tx, user.id, new_role).await?;
        if old_role != new_role {
            ProfileRepo::set_role(&mut *tx, user.id, new_role).await?;
            tracing::debug!(
                user_id = user.id,
                old_role,
                new_role,
                "Role follows capability change"
            );
        }

        tx.commit().await?;
        Ok(Some(user))
    }

    /// Record a successful login by setting `last_login_at` to now.
    ///
    /// This is a save of the user like any other, so the profile hook runs too.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let flags: Option<(bool, bool)> = sqlx::query_as(
            "UPDATE users SET last_login_at = NOW() WHERE id = $1
             RETURNING is_staff, is_superuser",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        if let Some((is_staff, is_superuser)) = flags {
            let role = role_for_capabilities(is_staff, is_superuser);
            ProfileRepo::sync_for_user(&mut tx, id, role).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

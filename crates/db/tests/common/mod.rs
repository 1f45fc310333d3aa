#![allow(dead_code)]

use bloodbank_db::models::user::{CreateUser, User};
use bloodbank_db::repositories::UserRepo;
use sqlx::PgPool;

/// Insert a user through the repository (so the profile hook runs).
pub async fn create_user(pool: &PgPool, username: &str, is_staff: bool) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        is_staff,
        is_superuser: false,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Count profile rows for a user directly.
pub async fn profile_count(pool: &PgPool, user_id: i64) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

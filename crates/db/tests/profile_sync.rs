//! The profile hook: one profile per user, created on insert and
//! re-saved (never duplicated) on every later save.

mod common;

use bloodbank_db::models::user::UpdateUser;
use bloodbank_db::repositories::{ProfileRepo, UserRepo};
use common::{create_user, profile_count};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn creating_a_user_creates_one_user_profile(pool: PgPool) {
    let user = create_user(&pool, "alice", false).await;

    assert_eq!(profile_count(&pool, user.id).await, 1);
    let profile = ProfileRepo::find_by_user_id(&pool, user.id)
        .await
        .unwrap()
        .expect("profile should exist");
    assert_eq!(profile.role, "user");
}

#[sqlx::test(migrations = "./migrations")]
async fn later_saves_do_not_duplicate_or_reset_the_profile(pool: PgPool) {
    let user = create_user(&pool, "bob", false).await;
    ProfileRepo::set_role(&pool, user.id, "staff").await.unwrap();

    let update = UpdateUser {
        first_name: Some("Robert".into()),
        ..Default::default()
    };
    UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .expect("user should exist");
    UserRepo::record_successful_login(&pool, user.id).await.unwrap();

    assert_eq!(profile_count(&pool, user.id).await, 1);
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "staff");
}

#[sqlx::test(migrations = "./migrations")]
async fn saving_a_user_recreates_a_missing_profile(pool: PgPool) {
    let user = create_user(&pool, "carol", false).await;
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(profile_count(&pool, user.id).await, 0);

    UserRepo::update(&pool, user.id, &UpdateUser::default())
        .await
        .unwrap()
        .expect("user should exist");

    assert_eq!(profile_count(&pool, user.id).await, 1);
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "user");
}

#[sqlx::test(migrations = "./migrations")]
async fn capability_changes_move_the_role_with_them(pool: PgPool) {
    let user = create_user(&pool, "frank", true).await;
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "staff");

    let promote = UpdateUser {
        is_superuser: Some(true),
        ..Default::default()
    };
    UserRepo::update(&pool, user.id, &promote).await.unwrap();
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "admin");

    let demote = UpdateUser {
        is_staff: Some(false),
        is_superuser: Some(false),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &demote)
        .await
        .unwrap()
        .expect("user should exist");
    assert!(!updated.is_staff);
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "user");
    assert_eq!(profile_count(&pool, user.id).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn unchanged_capability_keeps_a_hand_set_role(pool: PgPool) {
    let user = create_user(&pool, "gina", true).await;
    ProfileRepo::set_role(&pool, user.id, "admin").await.unwrap();

    let same_level = UpdateUser {
        is_staff: Some(true),
        ..Default::default()
    };
    UserRepo::update(&pool, user.id, &same_level).await.unwrap();
    assert_eq!(ProfileRepo::resolve_role(&pool, user.id).await.unwrap(), "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn updating_a_missing_user_returns_none(pool: PgPool) {
    let result = UserRepo::update(&pool, 9_999, &UpdateUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn response_view_carries_role_and_hides_hash(pool: PgPool) {
    let user = create_user(&pool, "dave", true).await;

    let view = UserRepo::find_response_by_id(&pool, user.id)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(view.role, "staff");
    assert!(view.is_staff);

    let staff = UserRepo::list_staff(&pool).await.unwrap();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].username, "dave");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_violates_named_constraint(pool: PgPool) {
    create_user(&pool, "erin", false).await;
    assert!(UserRepo::username_exists(&pool, "erin").await.unwrap());
    assert!(UserRepo::email_exists(&pool, "ERIN@test.com").await.unwrap());

    let input = bloodbank_db::models::user::CreateUser {
        username: "erin".into(),
        email: "other@test.com".into(),
        first_name: String::new(),
        last_name: String::new(),
        password_hash: "x".into(),
        is_staff: false,
        is_superuser: false,
    };
    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

//! Request lifecycle: submit, list, approve (with stock decrement), reject.

mod common;

use assert_matches::assert_matches;
use bloodbank_core::error::CoreError;
use bloodbank_core::request_status::RequestStatus;
use bloodbank_db::error::RepoError;
use bloodbank_db::models::blood_request::CreateBloodRequest;
use bloodbank_db::models::inventory::UpsertInventory;
use bloodbank_db::repositories::{BloodRequestRepo, InventoryRepo};
use common::create_user;
use sqlx::PgPool;

async fn stock(pool: &PgPool, blood_type: &str, quantity: i32) {
    let input = UpsertInventory {
        blood_type: blood_type.to_string(),
        quantity,
    };
    InventoryRepo::upsert(pool, &input).await.unwrap();
}

async fn on_hand(pool: &PgPool, blood_type: &str) -> i32 {
    InventoryRepo::find_by_blood_type(pool, blood_type)
        .await
        .unwrap()
        .expect("inventory entry should exist")
        .quantity
}

async fn submit(pool: &PgPool, requester_id: i64, blood_type: &str, units: i32) -> i64 {
    let input = CreateBloodRequest {
        requester_id,
        blood_type: blood_type.to_string(),
        units,
    };
    BloodRequestRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "./migrations")]
async fn new_requests_start_pending(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    let input = CreateBloodRequest {
        requester_id: user.id,
        blood_type: "A+".into(),
        units: 2,
    };
    let request = BloodRequestRepo::create(&pool, &input).await.unwrap();

    assert_eq!(request.status, "Pending");
    assert_eq!(request.status_id, RequestStatus::Pending.id());
    assert_eq!(request.requester_username, "requester");
    assert!(request.approved_at.is_none());
    assert_eq!(BloodRequestRepo::count_pending(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn zero_units_violate_the_check_constraint(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    let input = CreateBloodRequest {
        requester_id: user.id,
        blood_type: "A+".into(),
        units: 0,
    };
    let err = BloodRequestRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "./migrations")]
async fn requester_sees_only_own_requests(pool: PgPool) {
    let alice = create_user(&pool, "alice", false).await;
    let bob = create_user(&pool, "bob", false).await;
    let first = submit(&pool, alice.id, "A+", 1).await;
    let second = submit(&pool, alice.id, "B+", 1).await;
    submit(&pool, bob.id, "O-", 1).await;

    let mine = BloodRequestRepo::list_for_requester(&pool, alice.id).await.unwrap();
    let ids: Vec<i64> = mine.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first]);

    let pending = BloodRequestRepo::list_pending(&pool).await.unwrap();
    assert_eq!(pending.len(), 3);
    assert_eq!(pending[0].id, first);
}

#[sqlx::test(migrations = "./migrations")]
async fn approval_decrements_stock_and_stamps_time(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "A+", 10).await;
    let id = submit(&pool, user.id, "A+", 3).await;

    let approved = BloodRequestRepo::decide(&pool, id, RequestStatus::Approved, true)
        .await
        .unwrap();

    assert_eq!(approved.status, "Approved");
    assert!(approved.approved_at.is_some());
    assert_eq!(on_hand(&pool, "A+").await, 7);
    assert_eq!(BloodRequestRepo::count_pending(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn approval_without_adjustment_leaves_stock(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "B-", 1).await;
    let id = submit(&pool, user.id, "B-", 5).await;

    let approved = BloodRequestRepo::decide(&pool, id, RequestStatus::Approved, false)
        .await
        .unwrap();

    assert_eq!(approved.status, "Approved");
    assert_eq!(on_hand(&pool, "B-").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn insufficient_stock_leaves_request_pending(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "O+", 2).await;
    let id = submit(&pool, user.id, "O+", 3).await;

    let result = BloodRequestRepo::decide(&pool, id, RequestStatus::Approved, true).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Conflict(_))));

    let request = BloodRequestRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(request.status, "Pending");
    assert_eq!(on_hand(&pool, "O+").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn approval_without_inventory_entry_conflicts(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    let id = submit(&pool, user.id, "AB-", 1).await;

    let result = BloodRequestRepo::decide(&pool, id, RequestStatus::Approved, true).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Conflict(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn decided_requests_cannot_change_again(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "A-", 10).await;
    let approved = submit(&pool, user.id, "A-", 1).await;
    let rejected = submit(&pool, user.id, "A-", 1).await;

    BloodRequestRepo::decide(&pool, approved, RequestStatus::Approved, true)
        .await
        .unwrap();
    BloodRequestRepo::decide(&pool, rejected, RequestStatus::Rejected, true)
        .await
        .unwrap();

    assert_matches!(
        BloodRequestRepo::decide(&pool, approved, RequestStatus::Approved, true).await,
        Err(RepoError::Core(CoreError::Conflict(_)))
    );
    assert_matches!(
        BloodRequestRepo::decide(&pool, rejected, RequestStatus::Approved, true).await,
        Err(RepoError::Core(CoreError::Conflict(_)))
    );
    assert_eq!(on_hand(&pool, "A-").await, 9);
}

#[sqlx::test(migrations = "./migrations")]
async fn rejection_leaves_stock_and_approved_at_untouched(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "B+", 4).await;
    let id = submit(&pool, user.id, "B+", 2).await;

    let rejected = BloodRequestRepo::decide(&pool, id, RequestStatus::Rejected, true)
        .await
        .unwrap();

    assert_eq!(rejected.status, "Rejected");
    assert!(rejected.approved_at.is_none());
    assert_eq!(on_hand(&pool, "B+").await, 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn deciding_a_missing_request_is_not_found(pool: PgPool) {
    let result = BloodRequestRepo::decide(&pool, 12_345, RequestStatus::Rejected, true).await;
    assert_matches!(
        result,
        Err(RepoError::Core(CoreError::NotFound { entity: "BloodRequest", id: 12_345 }))
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_approvals_never_oversell(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    stock(&pool, "O-", 5).await;
    let first = submit(&pool, user.id, "O-", 3).await;
    let second = submit(&pool, user.id, "O-", 3).await;

    let (a, b) = tokio::join!(
        BloodRequestRepo::decide(&pool, first, RequestStatus::Approved, true),
        BloodRequestRepo::decide(&pool, second, RequestStatus::Approved, true),
    );

    assert_eq!(
        [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(),
        1,
        "exactly one approval should fit in stock"
    );
    assert_eq!(on_hand(&pool, "O-").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn status_counts_cover_every_status(pool: PgPool) {
    let user = create_user(&pool, "requester", false).await;
    let id = submit(&pool, user.id, "A+", 1).await;
    submit(&pool, user.id, "A+", 1).await;
    BloodRequestRepo::decide(&pool, id, RequestStatus::Rejected, true)
        .await
        .unwrap();

    let counts: Vec<(String, i64)> =
        BloodRequestRepo::count_by_status_for_requester(&pool, user.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| (c.status, c.count))
            .collect();
    assert_eq!(
        counts,
        vec![
            ("Pending".to_string(), 1),
            ("Approved".to_string(), 0),
            ("Rejected".to_string(), 1),
        ]
    );
}

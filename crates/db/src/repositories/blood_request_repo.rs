//! Repository for the `blood_requests` table and the approval workflow.

use bloodbank_core::error::CoreError;
use bloodbank_core::inventory::remaining_after;
use bloodbank_core::request_status::{RequestStatus, StatusId};
use bloodbank_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::blood_request::{BloodRequest, CreateBloodRequest, StatusCount};
use crate::repositories::InventoryRepo;

/// Joined column list; every query aliases the request table as `r`.
const COLUMNS: &str = "r.id, r.requester_id, u.username AS requester_username, \
                        r.blood_type, r.units, r.status_id, s.name AS status, \
                        r.requested_at, r.approved_at";

/// Joins needed by [`COLUMNS`].
const JOINS: &str = "JOIN users u ON u.id = r.requester_id \
                     JOIN blood_request_statuses s ON s.id = r.status_id";

/// Provides the request ledger and its staff-side transitions.
pub struct BloodRequestRepo;

impl BloodRequestRepo {
    /// Submit a new request in the Pending state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBloodRequest,
    ) -> Result<BloodRequest, sqlx::Error> {
        let query = format!(
            "WITH r AS (
                INSERT INTO blood_requests (requester_id, blood_type, units, status_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {COLUMNS} FROM r {JOINS}"
        );
        sqlx::query_as::<_, BloodRequest>(&query)
            .bind(input.requester_id)
            .bind(&input.blood_type)
            .bind(input.units)
            .bind(RequestStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BloodRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blood_requests r {JOINS} WHERE r.id = $1");
        sqlx::query_as::<_, BloodRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All requests filed by one user, any status, newest first.
    pub async fn list_for_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<BloodRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blood_requests r {JOINS}
             WHERE r.requester_id = $1
             ORDER BY r.requested_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, BloodRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }

    /// Every request across all users, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BloodRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blood_requests r {JOINS}
             ORDER BY r.requested_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, BloodRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Pending requests, oldest first (work queue order).
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<BloodRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blood_requests r {JOINS}
             WHERE r.status_id = $1
             ORDER BY r.requested_at ASC, r.id ASC"
        );
        sqlx::query_as::<_, BloodRequest>(&query)
            .bind(RequestStatus::Pending.id())
            .fetch_all(pool)
            .await
    }

    /// Number of requests still awaiting a decision.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM blood_requests WHERE status_id = $1")
                .bind(RequestStatus::Pending.id())
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Request counts per status for one requester. Statuses with no
    /// requests are reported with a count of zero.
    pub async fn count_by_status_for_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT s.name AS status, COUNT(r.id) AS count
             FROM blood_request_statuses s
             LEFT JOIN blood_requests r ON r.status_id = s.id AND r.requester_id = $1
             GROUP BY s.id, s.name
             ORDER BY s.id",
        )
        .bind(requester_id)
        .fetch_all(pool)
        .await
    }

    /// Move a request out of Pending.
    ///
    /// Runs in one transaction with the request row locked:
    /// 1. Fails with `NotFound` if the request does not exist.
    /// 2. Fails with `Conflict` if the state machine forbids the move
    ///    (already approved or rejected).
    /// 3. On approval with `adjust_inventory`, locks the matching inventory
    ///    entry and subtracts the requested units, failing with `Conflict`
    ///    when there is no entry or not enough stock.
    /// 4. Writes the new status; approval also stamps `approved_at`.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        next: RequestStatus,
        adjust_inventory: bool,
    ) -> Result<BloodRequest, RepoError> {
        let mut tx = pool.begin().await?;

        let row: Option<(StatusId, String, i32)> = sqlx::query_as(
            "SELECT status_id, blood_type, units FROM blood_requests WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let (status_id, blood_type, units) = row.ok_or(CoreError::NotFound {
            entity: "BloodRequest",
            id,
        })?;

        let current = RequestStatus::from_id(status_id).ok_or_else(|| {
            CoreError::Internal(format!("Unknown blood request status id {status_id}"))
        })?;
        current.transition_to(next)?;

        if next == RequestStatus::Approved && adjust_inventory {
            let entry = InventoryRepo::lock_by_blood_type(&mut tx, &blood_type)
                .await?
                .ok_or_else(|| {
                    CoreError::Conflict(format!("No {blood_type} inventory on record"))
                })?;
            let remaining = remaining_after(&blood_type, entry.quantity, units)?;
            InventoryRepo::set_quantity(&mut tx, entry.id, remaining).await?;

            tracing::debug!(
                request_id = id,
                blood_type = %blood_type,
                units,
                remaining,
                "Inventory adjusted for approval"
            );
        }

        sqlx::query(
            "UPDATE blood_requests SET
                status_id = $2,
                approved_at = CASE WHEN $2 = $3 THEN NOW() ELSE approved_at END
             WHERE id = $1 AND status_id = $4",
        )
        .bind(id)
        .bind(next.id())
        .bind(RequestStatus::Approved.id())
        .bind(RequestStatus::Pending.id())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(RepoError::Database(sqlx::Error::RowNotFound))
    }
}

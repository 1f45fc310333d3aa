//! Repository for the `announcements` table.

use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement};

const COLUMNS: &str = "id, title, message, created_at";

pub struct AnnouncementRepo;

impl AnnouncementRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, message) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// All announcements, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }
}

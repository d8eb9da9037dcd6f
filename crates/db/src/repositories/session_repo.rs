//! Repository for the `class_sessions` table.

use rollcall_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::class_session::{ClassSession, CreateClassSession};

/// Column list for class_sessions queries.
const COLUMNS: &str = "id, class_id, started_at, ended_at, location, created_at";

/// Stored capture session operations.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a new stored session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClassSession,
    ) -> Result<ClassSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_sessions (class_id, started_at, ended_at, location)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(input.class_id)
            .bind(input.started_at)
            .bind(input.ended_at)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a stored session by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClassSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_sessions WHERE id = $1");
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions whose window covers `at`. An open-ended session
    /// (NULL `ended_at`) is active from its start onward.
    pub async fn list_active_at(
        pool: &PgPool,
        at: Timestamp,
    ) -> Result<Vec<ClassSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM class_sessions
             WHERE started_at <= $1 AND (ended_at IS NULL OR ended_at > $1)
             ORDER BY started_at DESC"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(at)
            .fetch_all(pool)
            .await
    }

    /// List all stored sessions for a class, newest first.
    pub async fn list_for_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<ClassSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM class_sessions
             WHERE class_id = $1
             ORDER BY started_at DESC"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `roster_entries` table.

use rollcall_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::Student;

/// Roster (enrollment) operations.
pub struct RosterRepo;

impl RosterRepo {
    /// Enroll a student in a class. Returns `true` if a new entry was
    /// created, `false` if the pair was already enrolled (idempotent).
    pub async fn add(pool: &PgPool, class_id: DbId, student_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO roster_entries (class_id, student_id)
             VALUES ($1, $2)
             ON CONFLICT (class_id, student_id) DO NOTHING",
        )
        .bind(class_id)
        .bind(student_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unenroll a student from a class. Returns `true` if an entry was
    /// removed (idempotent: removing a non-member is a no-op).
    pub async fn remove(
        pool: &PgPool,
        class_id: DbId,
        student_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM roster_entries WHERE class_id = $1 AND student_id = $2")
                .bind(class_id)
                .bind(student_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the (class, student) enrollment edge exists. This is the
    /// authorization check gating PRESENT records.
    pub async fn is_enrolled(
        pool: &PgPool,
        class_id: DbId,
        student_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM roster_entries WHERE class_id = $1 AND student_id = $2
             )",
        )
        .bind(class_id)
        .bind(student_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List every enrolled student for a class, ordered by name.
    pub async fn list_students(pool: &PgPool, class_id: DbId) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "SELECT s.id, s.external_id, s.first_name, s.last_name, s.email,
                    s.photo_url, s.created_at
             FROM roster_entries r
             JOIN students s ON s.id = r.student_id
             WHERE r.class_id = $1
             ORDER BY s.last_name, s.first_name, s.external_id",
        )
        .bind(class_id)
        .fetch_all(pool)
        .await
    }
}

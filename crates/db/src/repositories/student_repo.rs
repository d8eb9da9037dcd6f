//! Repository for the `students` table.

use rollcall_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

/// Column list for students queries.
const COLUMNS: &str = "id, external_id, first_name, last_name, email, photo_url, created_at";

/// Student directory operations.
pub struct StudentRepo;

impl StudentRepo {
    /// Create a new student, returning the created row.
    ///
    /// A duplicate external id violates `uq_students_external_id` and
    /// surfaces as a database error for the caller to classify.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (external_id, first_name, last_name, email, photo_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.external_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a student by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a student by the school-issued external id.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE external_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// List all students, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students ORDER BY last_name, first_name, external_id"
        );
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }
}

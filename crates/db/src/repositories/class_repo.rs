//! Repository for the `course_classes` table.

use rollcall_core::types::DbId;
use sqlx::PgPool;

use crate::models::course_class::{CourseClass, CreateCourseClass, UpdateCourseClass};

/// Column list for course_classes queries.
const COLUMNS: &str = "id, name, code, description, created_at";

/// Class directory operations.
pub struct ClassRepo;

impl ClassRepo {
    /// Create a new class, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseClass,
    ) -> Result<CourseClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_classes (name, code, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseClass>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a class by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_classes WHERE id = $1");
        sqlx::query_as::<_, CourseClass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<CourseClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_classes ORDER BY code, name");
        sqlx::query_as::<_, CourseClass>(&query).fetch_all(pool).await
    }

    /// Update a class by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseClass,
    ) -> Result<Option<CourseClass>, sqlx::Error> {
        let query = format!(
            "UPDATE course_classes SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseClass>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class. Roster entries, sessions, and attendance records
    /// cascade at the database level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

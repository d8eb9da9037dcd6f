//! Course class model.

use rollcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `course_classes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseClass {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new class.
#[derive(Debug, Deserialize)]
pub struct CreateCourseClass {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

/// DTO for updating a class.
#[derive(Debug, Deserialize)]
pub struct UpdateCourseClass {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

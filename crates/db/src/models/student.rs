//! Student model. Owned by the student directory; the `external_id` is
//! the stable school-issued identifier recognition events refer to.

use rollcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub external_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub external_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

//! Stored capture session model (the richer session variant).
//!
//! Attendance intake does not require a stored session -- batches carry
//! an opaque caller-supplied session id. Stored sessions exist so
//! clients can schedule capture windows and query which are active.

use rollcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `class_sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClassSession {
    pub id: DbId,
    pub class_id: DbId,
    pub started_at: Timestamp,
    /// `None` means open-ended: the session is active from `started_at` on.
    pub ended_at: Option<Timestamp>,
    pub location: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new stored session.
#[derive(Debug, Deserialize)]
pub struct CreateClassSession {
    pub class_id: DbId,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub location: Option<String>,
}

//! Roster entry model: the (class, student) enrollment edge.
//!
//! At most one entry exists per pair (`uq_roster_entries_class_student`).
//! Entries are created on enroll and deleted on unenroll, never updated.

use rollcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `roster_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RosterEntry {
    pub id: DbId,
    pub class_id: DbId,
    pub student_id: DbId,
    pub created_at: Timestamp,
}

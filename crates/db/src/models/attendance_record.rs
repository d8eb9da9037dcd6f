//! Attendance ledger models.
//!
//! A record is unique per (student, class, session) triple and is never
//! mutated after creation. `AttendanceRecord` mirrors the raw row;
//! `AttendanceRecordDetail` is the joined read-view with student and
//! class display fields for the query endpoints.

use rollcall_core::attendance::AttendanceStatus;
use rollcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `attendance_records` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: String,
    pub status: String,
    pub confidence: f64,
    pub position: String,
    pub recorded_at: Timestamp,
    pub session_started_at: Timestamp,
}

/// A ledger row joined with student and class display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendanceRecordDetail {
    pub id: DbId,
    pub student_id: DbId,
    pub student_external_id: String,
    pub student_name: String,
    pub class_id: DbId,
    pub class_name: String,
    pub session_id: String,
    pub status: String,
    pub confidence: f64,
    pub position: String,
    pub recorded_at: Timestamp,
    pub session_started_at: Timestamp,
}

/// Insert DTO for a new ledger entry. Built by the reconciliation
/// engine, never deserialized from the wire.
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord {
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: String,
    pub status: AttendanceStatus,
    pub confidence: f64,
    pub position: String,
    pub recorded_at: Timestamp,
    pub session_started_at: Timestamp,
}

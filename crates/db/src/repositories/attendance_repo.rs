//! Repository for the `attendance_records` ledger.
//!
//! The write path is a single conflict-free insert: the check-then-insert
//! for the (student, class, session) key is delegated to the database's
//! unique constraint, so concurrent writers cannot both pass an existence
//! check before either write lands.

use rollcall_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::attendance_record::{
    AttendanceRecord, AttendanceRecordDetail, NewAttendanceRecord,
};

/// Column list for attendance_records queries.
const COLUMNS: &str = "id, student_id, class_id, session_id, status, confidence, \
    \"position\", recorded_at, session_started_at";

/// Joined select for the detail read-view.
const DETAIL_SELECT: &str = "SELECT a.id, a.student_id, s.external_id AS student_external_id, \
    s.first_name || ' ' || s.last_name AS student_name, \
    a.class_id, c.name AS class_name, a.session_id, a.status, a.confidence, \
    a.\"position\", a.recorded_at, a.session_started_at \
    FROM attendance_records a \
    JOIN students s ON s.id = a.student_id \
    JOIN course_classes c ON c.id = a.class_id";

/// Attendance ledger operations.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert a ledger entry unless one already exists for the same
    /// (student, class, session) triple.
    ///
    /// Returns the created row, or `None` when the triple was already
    /// covered -- the "already recorded, skip" outcome. Existing rows are
    /// never touched.
    pub async fn insert_if_absent(
        pool: &PgPool,
        record: &NewAttendanceRecord,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_records
                (student_id, class_id, session_id, status, confidence, \"position\",
                 recorded_at, session_started_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (student_id, class_id, session_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(record.student_id)
            .bind(record.class_id)
            .bind(&record.session_id)
            .bind(record.status.as_str())
            .bind(record.confidence)
            .bind(&record.position)
            .bind(record.recorded_at)
            .bind(record.session_started_at)
            .fetch_optional(pool)
            .await
    }

    /// Look up the ledger entry for a (student, class, session) key.
    pub async fn find_by_key(
        pool: &PgPool,
        student_id: DbId,
        class_id: DbId,
        session_id: &str,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_records
             WHERE student_id = $1 AND class_id = $2 AND session_id = $3"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .bind(class_id)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Records for a class, optionally restricted to one session,
    /// newest first.
    pub async fn list_for_class(
        pool: &PgPool,
        class_id: DbId,
        session_id: Option<&str>,
    ) -> Result<Vec<AttendanceRecordDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE a.class_id = $1 AND ($2::text IS NULL OR a.session_id = $2)
             ORDER BY a.recorded_at DESC"
        );
        sqlx::query_as::<_, AttendanceRecordDetail>(&query)
            .bind(class_id)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Records for a class within `[start, end)`, newest first. Backs the
    /// calendar-day view.
    pub async fn list_for_class_between(
        pool: &PgPool,
        class_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<AttendanceRecordDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE a.class_id = $1 AND a.recorded_at >= $2 AND a.recorded_at < $3
             ORDER BY a.recorded_at DESC"
        );
        sqlx::query_as::<_, AttendanceRecordDetail>(&query)
            .bind(class_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Total ledger entries for a (class, session) pair.
    pub async fn count_for_session(
        pool: &PgPool,
        class_id: DbId,
        session_id: &str,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendance_records WHERE class_id = $1 AND session_id = $2",
        )
        .bind(class_id)
        .bind(session_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

//! Absence sweep: fill in ABSENT records for enrolled students with no
//! ledger entry in a session.

use chrono::Utc;
use sqlx::PgPool;

use rollcall_core::attendance::AttendanceStatus;
use rollcall_core::types::Timestamp;
use rollcall_db::models::attendance_record::{AttendanceRecord, NewAttendanceRecord};
use rollcall_db::models::course_class::CourseClass;
use rollcall_db::repositories::{AttendanceRepo, RosterRepo};

use crate::error::AppResult;

/// Mark every enrolled student with no ledger entry for the session as
/// ABSENT.
///
/// Each per-student write is an independent conflict-free insert, so the
/// sweep is idempotent: students already covered (present from intake,
/// or absent from an earlier sweep) are skipped, and re-running after a
/// partial failure recovers the missing entries.
///
/// Returns the newly created ABSENT records, in roster order.
pub async fn mark_absences(
    pool: &PgPool,
    class: &CourseClass,
    session_id: &str,
    session_started_at: Option<Timestamp>,
) -> AppResult<Vec<AttendanceRecord>> {
    let timestamp = session_started_at.unwrap_or_else(Utc::now);
    let roster = RosterRepo::list_students(pool, class.id).await?;

    let mut created = Vec::new();

    for student in &roster {
        let record = AttendanceRepo::insert_if_absent(
            pool,
            &NewAttendanceRecord {
                student_id: student.id,
                class_id: class.id,
                session_id: session_id.to_string(),
                status: AttendanceStatus::Absent,
                confidence: 0.0,
                position: String::new(),
                recorded_at: timestamp,
                session_started_at: timestamp,
            },
        )
        .await?;

        match record {
            Some(rec) => created.push(rec),
            None => {
                tracing::debug!(
                    class_id = %class.id,
                    session_id,
                    student_external_id = %student.external_id,
                    "Student already covered, sweep skips"
                );
            }
        }
    }

    Ok(created)
}

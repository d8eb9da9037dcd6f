//! Batch intake: recognition events -> PRESENT ledger entries.

use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;

use rollcall_core::attendance::{self, AttendanceStatus, EventOutcome};
use rollcall_core::types::Timestamp;
use rollcall_db::models::attendance_record::{AttendanceRecord, NewAttendanceRecord};
use rollcall_db::models::course_class::CourseClass;
use rollcall_db::repositories::{AttendanceRepo, RosterRepo, StudentRepo};

use crate::error::{AppError, AppResult};

/// One ML inference result: a claimed identity, a confidence score, and
/// a spatial position hint. `student_id` carries the school-issued
/// external id, matching the upstream recognizer payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedEvent {
    pub student_id: String,
    pub confidence: f64,
    #[serde(default)]
    pub position: String,
}

/// Request body for a recognition batch.
#[derive(Debug, Deserialize)]
pub struct RecognitionBatch {
    pub recognized: Vec<RecognizedEvent>,
}

/// Record a batch of recognition events for one class and capture session.
///
/// Request-level validation (confidence range, blank external ids) fails
/// the whole batch before any write. Per-event conditions -- unknown
/// student, not enrolled, already recorded this session -- skip that
/// event silently and keep going: recognition output is noisy, and one
/// bad detection must not abort the valid ones.
///
/// Events are processed sequentially; each write is a conflict-free
/// insert, so a concurrent batch for the same session cannot produce
/// duplicate ledger entries.
///
/// Returns the records actually created, in input order.
pub async fn record_batch(
    pool: &PgPool,
    class: &CourseClass,
    session_id: &str,
    session_started_at: Option<Timestamp>,
    events: &[RecognizedEvent],
) -> AppResult<Vec<AttendanceRecord>> {
    // Malformed events reject the whole batch before any ledger write
    // happens.
    for event in events {
        attendance::validate_confidence(event.confidence).map_err(AppError::validation)?;
        attendance::validate_external_id(&event.student_id).map_err(AppError::validation)?;
    }

    let mut created = Vec::new();

    for event in events {
        let outcome = reconcile_event(pool, class, session_id, session_started_at, event).await?;

        match outcome {
            Ok(record) => created.push(record),
            Err(skip) => {
                tracing::debug!(
                    class_id = %class.id,
                    session_id,
                    student_external_id = %event.student_id,
                    outcome = skip.label(),
                    "Recognition event skipped"
                );
            }
        }
    }

    Ok(created)
}

/// Apply the enrollment and dedup gate to a single event.
///
/// The inner `Result` distinguishes a created record from a skip
/// outcome; the outer one carries storage faults, which propagate to
/// the caller immediately.
async fn reconcile_event(
    pool: &PgPool,
    class: &CourseClass,
    session_id: &str,
    session_started_at: Option<Timestamp>,
    event: &RecognizedEvent,
) -> AppResult<Result<AttendanceRecord, EventOutcome>> {
    // 1. Resolve the claimed identity. Unknown faces are ML false
    //    positives, not errors.
    let Some(student) = StudentRepo::find_by_external_id(pool, &event.student_id).await? else {
        return Ok(Err(EventOutcome::UnknownStudent));
    };

    // 2. Enrollment gate: a recognized-but-unenrolled person never
    //    yields a PRESENT record.
    if !RosterRepo::is_enrolled(pool, class.id, student.id).await? {
        return Ok(Err(EventOutcome::NotEnrolled));
    }

    // 3+4. Dedup and insert in one atomic step against the unique
    //      (student, class, session) constraint.
    let now = Utc::now();
    let record = AttendanceRepo::insert_if_absent(
        pool,
        &NewAttendanceRecord {
            student_id: student.id,
            class_id: class.id,
            session_id: session_id.to_string(),
            status: AttendanceStatus::Present,
            confidence: event.confidence,
            position: event.position.clone(),
            recorded_at: now,
            session_started_at: session_started_at.unwrap_or(now),
        },
    )
    .await?;

    Ok(record.ok_or(EventOutcome::AlreadyRecorded))
}

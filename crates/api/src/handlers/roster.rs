//! Handlers for class roster (enrollment) management.
//!
//! Enrollment is addressed by the student's school-issued external id,
//! matching how upstream systems refer to students.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use rollcall_core::types::DbId;
use rollcall_db::models::student::Student;
use rollcall_db::repositories::{ClassRepo, RosterRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve the (class, student) pair or fail with `NotFound`.
async fn require_pair(
    state: &AppState,
    class_id: DbId,
    external_id: &str,
) -> AppResult<Student> {
    ClassRepo::find_by_id(&state.pool, class_id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", class_id))?;

    StudentRepo::find_by_external_id(&state.pool, external_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student", external_id))
}

/// GET /classes/{class_id}/roster
///
/// List the enrolled students for a class.
pub async fn list_roster(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ClassRepo::find_by_id(&state.pool, class_id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", class_id))?;

    let students = RosterRepo::list_students(&state.pool, class_id).await?;
    Ok(Json(DataResponse { data: students }))
}

/// POST /classes/{class_id}/roster/{external_id}
///
/// Enroll a student. Re-enrolling is a no-op.
pub async fn enroll(
    State(state): State<AppState>,
    Path((class_id, external_id)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let student = require_pair(&state, class_id, &external_id).await?;

    let added = RosterRepo::add(&state.pool, class_id, student.id).await?;

    if added {
        tracing::info!(
            class_id = %class_id,
            student_external_id = %external_id,
            "Student enrolled"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /classes/{class_id}/roster/{external_id}
///
/// Unenroll a student. Removing a non-member is a no-op.
pub async fn unenroll(
    State(state): State<AppState>,
    Path((class_id, external_id)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let student = require_pair(&state, class_id, &external_id).await?;

    let removed = RosterRepo::remove(&state.pool, class_id, student.id).await?;

    if removed {
        tracing::info!(
            class_id = %class_id,
            student_external_id = %external_id,
            "Student unenrolled"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}

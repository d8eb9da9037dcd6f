//! Handlers for the student directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use rollcall_core::attendance::validate_external_id;
use rollcall_core::types::DbId;
use rollcall_db::models::student::CreateStudent;
use rollcall_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /students
///
/// Create a new student. A duplicate external id maps to 409 via the
/// `uq_students_external_id` constraint.
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    validate_external_id(&input.external_id).map_err(AppError::validation)?;
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(AppError::validation("Student name must not be blank"));
    }

    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        student_id = %student.id,
        external_id = %student.external_id,
        "Student created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /students
///
/// List all students.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: students }))
}

/// GET /students/{id}
///
/// Get a single student by ID.
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Student", id))?;

    Ok(Json(DataResponse { data: student }))
}

//! Handlers for class administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use rollcall_core::types::DbId;
use rollcall_db::models::course_class::{CreateCourseClass, UpdateCourseClass};
use rollcall_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /classes
///
/// Create a new class.
pub async fn create_class(
    State(state): State<AppState>,
    Json(input): Json<CreateCourseClass>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Class name must not be blank"));
    }
    if input.code.trim().is_empty() {
        return Err(AppError::validation("Class code must not be blank"));
    }

    let class = ClassRepo::create(&state.pool, &input).await?;

    tracing::info!(class_id = %class.id, code = %class.code, "Class created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: class })))
}

/// GET /classes
///
/// List all classes.
pub async fn list_classes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: classes }))
}

/// GET /classes/{id}
///
/// Get a single class by ID.
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", id))?;

    Ok(Json(DataResponse { data: class }))
}

/// PUT /classes/{id}
///
/// Update a class.
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourseClass>,
) -> AppResult<impl IntoResponse> {
    let class = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", id))?;

    tracing::info!(class_id = %id, "Class updated");

    Ok(Json(DataResponse { data: class }))
}

/// DELETE /classes/{id}
///
/// Delete a class. Roster entries, sessions, and attendance cascade.
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ClassRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::not_found("CourseClass", id));
    }

    tracing::info!(class_id = %id, "Class deleted");

    Ok(StatusCode::NO_CONTENT)
}

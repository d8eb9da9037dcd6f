//! Handlers for attendance intake, the absence sweep, and the ledger
//! query views.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use rollcall_core::attendance;
use rollcall_core::reporting;
use rollcall_core::types::DbId;
use rollcall_db::models::course_class::CourseClass;
use rollcall_db::repositories::{AttendanceRepo, ClassRepo};

use crate::engine;
use crate::engine::reconcile::RecognitionBatch;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters shared by batch intake and the absence sweep.
#[derive(Debug, serde::Deserialize)]
pub struct SessionScopeParams {
    pub class_id: DbId,
    pub session_id: String,
    pub session_started_at: Option<String>,
}

/// Query parameters for the per-class ledger view.
#[derive(Debug, serde::Deserialize)]
pub struct LedgerViewParams {
    pub session_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a class or fail the request with `NotFound`.
async fn require_class(state: &AppState, class_id: DbId) -> AppResult<CourseClass> {
    ClassRepo::find_by_id(&state.pool, class_id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", class_id))
}

// ---------------------------------------------------------------------------
// Intake & sweep
// ---------------------------------------------------------------------------

/// POST /attendance/batch?class_id=&session_id=&session_started_at=
///
/// Reconcile a batch of recognition events into PRESENT records.
pub async fn record_batch(
    State(state): State<AppState>,
    Query(params): Query<SessionScopeParams>,
    Json(batch): Json<RecognitionBatch>,
) -> AppResult<impl IntoResponse> {
    attendance::validate_session_id(&params.session_id).map_err(AppError::validation)?;
    let session_started_at =
        attendance::parse_session_started_at(params.session_started_at.as_deref())
            .map_err(AppError::validation)?;

    let class = require_class(&state, params.class_id).await?;

    let created = engine::record_batch(
        &state.pool,
        &class,
        &params.session_id,
        session_started_at,
        &batch.recognized,
    )
    .await?;

    tracing::info!(
        class_id = %class.id,
        session_id = %params.session_id,
        submitted = batch.recognized.len(),
        created = created.len(),
        "Attendance batch reconciled"
    );

    Ok(Json(DataResponse { data: created }))
}

/// POST /attendance/mark-absent?class_id=&session_id=&session_started_at=
///
/// Run the absence sweep for a session.
pub async fn mark_absent(
    State(state): State<AppState>,
    Query(params): Query<SessionScopeParams>,
) -> AppResult<impl IntoResponse> {
    attendance::validate_session_id(&params.session_id).map_err(AppError::validation)?;
    let session_started_at =
        attendance::parse_session_started_at(params.session_started_at.as_deref())
            .map_err(AppError::validation)?;

    let class = require_class(&state, params.class_id).await?;

    let created =
        engine::mark_absences(&state.pool, &class, &params.session_id, session_started_at).await?;

    tracing::info!(
        class_id = %class.id,
        session_id = %params.session_id,
        marked_absent = created.len(),
        "Absence sweep completed"
    );

    Ok(Json(DataResponse { data: created }))
}

// ---------------------------------------------------------------------------
// Query views
// ---------------------------------------------------------------------------

/// GET /attendance/class/{class_id}?session_id=
///
/// Ledger entries for a class, optionally filtered by session, newest first.
pub async fn list_for_class(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
    Query(params): Query<LedgerViewParams>,
) -> AppResult<impl IntoResponse> {
    require_class(&state, class_id).await?;

    let records =
        AttendanceRepo::list_for_class(&state.pool, class_id, params.session_id.as_deref()).await?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /attendance/class/{class_id}/today
///
/// Ledger entries for the current calendar day in the configured
/// reporting offset, newest first.
pub async fn list_for_class_today(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_class(&state, class_id).await?;

    let (start, end) = reporting::day_window(Utc::now(), state.config.report_offset);
    let records =
        AttendanceRepo::list_for_class_between(&state.pool, class_id, start, end).await?;

    Ok(Json(DataResponse { data: records }))
}

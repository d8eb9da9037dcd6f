//! Handlers for stored capture sessions (the richer session variant).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use rollcall_core::attendance::parse_session_started_at;
use rollcall_core::types::DbId;
use rollcall_db::models::class_session::CreateClassSession;
use rollcall_db::repositories::{ClassRepo, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the active-session listing.
#[derive(Debug, serde::Deserialize)]
pub struct ActiveSessionParams {
    /// RFC 3339 instant to test against; defaults to now.
    pub at: Option<String>,
}

/// POST /sessions
///
/// Create a stored session. The class must exist and the window must be
/// well-formed.
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<CreateClassSession>,
) -> AppResult<impl IntoResponse> {
    ClassRepo::find_by_id(&state.pool, input.class_id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", input.class_id))?;

    if let Some(ended_at) = input.ended_at {
        if ended_at <= input.started_at {
            return Err(AppError::validation("Session must end after it starts"));
        }
    }

    let session = SessionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        session_id = %session.id,
        class_id = %session.class_id,
        "Session created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /sessions/{id}
///
/// Get a stored session by ID.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Session", id))?;

    Ok(Json(DataResponse { data: session }))
}

/// GET /sessions/active?at=
///
/// List sessions whose window covers the given instant (default: now).
pub async fn list_active(
    State(state): State<AppState>,
    Query(params): Query<ActiveSessionParams>,
) -> AppResult<impl IntoResponse> {
    let at = parse_session_started_at(params.at.as_deref())
        .map_err(AppError::validation)?
        .unwrap_or_else(Utc::now);

    let sessions = SessionRepo::list_active_at(&state.pool, at).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /classes/{class_id}/sessions
///
/// List stored sessions for a class, newest first.
pub async fn list_for_class(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ClassRepo::find_by_id(&state.pool, class_id)
        .await?
        .ok_or_else(|| AppError::not_found("CourseClass", class_id))?;

    let sessions = SessionRepo::list_for_class(&state.pool, class_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

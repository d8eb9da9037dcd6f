//! Route definitions for attendance intake, the sweep, and ledger views.
//!
//! Mounted at `/attendance` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Attendance routes.
///
/// ```text
/// POST /batch                    -> record_batch (?class_id, session_id, session_started_at)
/// POST /mark-absent              -> mark_absent (?class_id, session_id, session_started_at)
/// GET  /class/{class_id}         -> list_for_class (?session_id)
/// GET  /class/{class_id}/today   -> list_for_class_today
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/batch", post(attendance::record_batch))
        .route("/mark-absent", post(attendance::mark_absent))
        .route("/class/{class_id}", get(attendance::list_for_class))
        .route("/class/{class_id}/today", get(attendance::list_for_class_today))
}

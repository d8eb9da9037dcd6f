pub mod attendance;
pub mod classes;
pub mod health;
pub mod sessions;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /attendance/batch                        reconcile recognition batch (POST)
/// /attendance/mark-absent                  absence sweep (POST)
/// /attendance/class/{class_id}             ledger for class (?session_id)
/// /attendance/class/{class_id}/today       ledger for current report day
///
/// /students                                list, create
/// /students/{id}                           get
///
/// /classes                                 list, create
/// /classes/{id}                            get, update, delete
/// /classes/{class_id}/roster               list enrolled students
/// /classes/{class_id}/roster/{external_id} enroll (POST), unenroll (DELETE)
/// /classes/{class_id}/sessions             stored sessions for class
///
/// /sessions                                create stored session
/// /sessions/active                         sessions covering an instant (?at)
/// /sessions/{id}                           get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Attendance intake, sweep, and ledger views (the engine).
        .nest("/attendance", attendance::router())
        // Student directory.
        .nest("/students", students::router())
        // Class administration and per-class roster/sessions.
        .nest("/classes", classes::router())
        // Stored capture sessions.
        .nest("/sessions", sessions::router())
}

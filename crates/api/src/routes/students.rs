//! Route definitions for the student directory.
//!
//! Mounted at `/students` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student routes.
///
/// ```text
/// GET  /        -> list_students
/// POST /        -> create_student
/// GET  /{id}    -> get_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list_students).post(students::create_student))
        .route("/{id}", get(students::get_student))
}

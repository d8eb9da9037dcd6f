//! Route definitions for stored capture sessions.
//!
//! Mounted at `/sessions` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Session routes.
///
/// ```text
/// POST /            -> create_session
/// GET  /active      -> list_active (?at)
/// GET  /{id}        -> get_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create_session))
        .route("/active", get(sessions::list_active))
        .route("/{id}", get(sessions::get_session))
}

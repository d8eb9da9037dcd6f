//! Route definitions for classes, their rosters, and their stored sessions.
//!
//! Mounted at `/classes` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{classes, roster, sessions};
use crate::state::AppState;

/// Class routes.
///
/// ```text
/// GET    /                                  -> list_classes
/// POST   /                                  -> create_class
/// GET    /{id}                              -> get_class
/// PUT    /{id}                              -> update_class
/// DELETE /{id}                              -> delete_class
/// GET    /{class_id}/roster                 -> list_roster
/// POST   /{class_id}/roster/{external_id}   -> enroll
/// DELETE /{class_id}/roster/{external_id}   -> unenroll
/// GET    /{class_id}/sessions               -> list_for_class (stored sessions)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list_classes).post(classes::create_class))
        .route(
            "/{id}",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route("/{class_id}/roster", get(roster::list_roster))
        .route(
            "/{class_id}/roster/{external_id}",
            post(roster::enroll).delete(roster::unenroll),
        )
        .route("/{class_id}/sessions", get(sessions::list_for_class))
}

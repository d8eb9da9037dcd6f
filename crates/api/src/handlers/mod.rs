//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `rollcall_core`, delegate to the
//! repositories in `rollcall_db` (or to the reconciliation engine), and
//! map errors via [`AppError`](crate::error::AppError).

pub mod attendance;
pub mod classes;
pub mod roster;
pub mod sessions;
pub mod students;

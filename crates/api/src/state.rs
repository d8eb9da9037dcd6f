use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// There is deliberately no process-global configuration; everything the
/// engine needs reaches it through this struct.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rollcall_db::DbPool,
    /// Server configuration (reporting offset, timeouts).
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. The pool is
/// constructed once at startup and injected here, never looked up through
/// globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vetclinic_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

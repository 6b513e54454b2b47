use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is internally reference-counted and the
/// config sits behind an `Arc`. There is no other process-wide mutable
/// state; every request works off its own checked-out connection.
#[derive(Clone)]
pub struct AppState {
    /// Lazy database connection pool.
    pub pool: formai_db::DbPool,
    /// Server configuration, built once at startup.
    pub config: Arc<ServerConfig>,
}

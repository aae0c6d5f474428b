use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the handlers themselves are stateless and every
/// request goes straight to the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: civitrack_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use parkhaus_dispatch::Dispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers only use it for the health
    /// check; all parking reads and writes go through the dispatcher.
    pub pool: parkhaus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Submit handle to the single command-dispatch task.
    pub dispatcher: Dispatcher,
}

use std::sync::Arc;

use crate::auth::verifier::TokenVerifier;
use crate::config::ServerConfig;
use crate::engine::import::ImportEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gitshelf_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Identity-provider collaborator. Injected once at process start so
    /// tests can substitute a fake.
    pub verifier: Arc<dyn TokenVerifier>,
    /// Import status engine driving project status simulations.
    pub engine: Arc<ImportEngine>,
}

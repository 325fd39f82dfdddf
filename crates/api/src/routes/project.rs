//! Route definitions for the `/projects` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list (owner's projects, newest first)
/// POST   /        -> create (validates URL, starts the import pipeline)
/// PATCH  /{id}    -> update (status triple only, owner match)
/// DELETE /{id}    -> delete (owner match)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", patch(project::update).delete(project::delete))
}

pub mod auth;
pub mod book;
pub mod health;
pub mod project;

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/google                  sign in (public)
/// /auth/me                      current user
/// /auth/logout                  logout
///
/// /projects                     list, create
/// /projects/{id}                patch, delete
///
/// /books                        list available, create
/// /books/mine                   own shelf
/// /books/{id}                   patch, delete
/// /books/{id}/requests          create request
///
/// /requests                     outgoing requests
/// /requests/incoming            incoming requests
/// /requests/{id}                patch status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/books", book::router())
        .route(
            "/requests",
            get(handlers::book_request::list_outgoing),
        )
        .route(
            "/requests/incoming",
            get(handlers::book_request::list_incoming),
        )
        .route("/requests/{id}", patch(handlers::book_request::update))
}

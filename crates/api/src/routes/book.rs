//! Route definitions for the `/books` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{book, book_request};
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /               -> list_available
/// POST   /               -> create
/// GET    /mine           -> list_mine
/// PATCH  /{id}           -> update (owner match)
/// DELETE /{id}           -> delete (owner match)
/// POST   /{id}/requests  -> request the book
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list_available).post(book::create))
        .route("/mine", get(book::list_mine))
        .route("/{id}", patch(book::update).delete(book::delete))
        .route("/{id}/requests", post(book_request::create))
}

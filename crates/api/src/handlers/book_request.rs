//! Handlers for book requests.
//!
//! Collectors request available books they do not own; the book's owner
//! sets the request status. There is no matching or approval engine behind
//! the status field.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use gitshelf_core::error::CoreError;
use gitshelf_core::types::DbId;
use gitshelf_db::models::book_request::{BookRequest, UpdateBookRequest};
use gitshelf_db::repositories::{BookRepo, BookRequestRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/books/{id}/requests
///
/// Create a `pending` request for a book. Requesting your own book or an
/// unavailable one is a validation error; an unknown book is 404.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<BookRequest>)> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    if book.owner_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot request your own book".into(),
        )));
    }
    if !book.is_available {
        return Err(AppError::Core(CoreError::Validation(
            "Book is not available".into(),
        )));
    }

    let request = BookRequestRepo::create(&state.pool, book_id, auth.user_id).await?;
    tracing::info!(
        request_id = request.id,
        book_id,
        requester_id = auth.user_id,
        "Created book request"
    );
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/requests
///
/// Requests the authenticated user has made, newest first.
pub async fn list_outgoing(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<BookRequest>>>> {
    let requests = BookRequestRepo::list_by_requester(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/requests/incoming
///
/// Requests against the authenticated user's books, newest first.
pub async fn list_incoming(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<BookRequest>>>> {
    let requests = BookRequestRepo::list_incoming(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// PATCH /api/v1/requests/{id}
///
/// Set a request's status. Only the owner of the requested book may do
/// this; anyone else sees 404.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookRequest>,
) -> AppResult<Json<BookRequest>> {
    let request = BookRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BookRequest",
            id,
        }))?;

    let book = BookRepo::find_by_id(&state.pool, request.book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: request.book_id,
        }))?;

    if book.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BookRequest",
            id,
        }));
    }

    let updated = BookRequestRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BookRequest",
            id,
        }))?;
    Ok(Json(updated))
}

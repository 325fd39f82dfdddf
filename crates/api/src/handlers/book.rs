//! Handlers for the `/books` resource.
//!
//! Donors manage their own shelf; collectors browse whatever is currently
//! available. Writes require owner match, reported as 404 on mismatch.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use gitshelf_core::book;
use gitshelf_core::error::CoreError;
use gitshelf_core::types::DbId;
use gitshelf_db::models::book::{Book, CreateBook, UpdateBook};
use gitshelf_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a book and enforce the owner match.
async fn ensure_owned_book(pool: &sqlx::PgPool, id: DbId, owner_id: DbId) -> AppResult<Book> {
    let found = BookRepo::find_by_id(pool, id).await?;
    match found {
        Some(b) if b.owner_id == owner_id => Ok(b),
        _ => Err(AppError::Core(CoreError::NotFound { entity: "Book", id })),
    }
}

/// GET /api/v1/books
///
/// All currently available books across donors.
pub async fn list_available(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Book>>>> {
    let books = BookRepo::list_available(&state.pool).await?;
    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Book>>>> {
    let books = BookRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: books }))
}

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    book::validate_title(&input.title)?;
    book::validate_author(&input.author)?;

    let created = BookRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(book_id = created.id, owner_id = auth.user_id, "Created book");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/v1/books/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    ensure_owned_book(&state.pool, id, auth.user_id).await?;

    if let Some(title) = &input.title {
        book::validate_title(title)?;
    }
    if let Some(author) = &input.author {
        book::validate_author(author)?;
    }

    let updated = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/books/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_owned_book(&state.pool, id, auth.user_id).await?;

    let deleted = BookRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Book", id }))
    }
}

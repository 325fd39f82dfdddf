//! Repository for the `book_requests` table.

use sqlx::PgPool;

use gitshelf_core::book::RequestStatus;
use gitshelf_core::types::DbId;

use crate::models::book_request::BookRequest;

/// Column list for book_requests queries.
const COLUMNS: &str = "id, book_id, requester_id, status, created_at, updated_at";

/// Provides operations for collectors' book requests.
pub struct BookRequestRepo;

impl BookRequestRepo {
    /// Insert a new `pending` request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        book_id: DbId,
        requester_id: DbId,
    ) -> Result<BookRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO book_requests (book_id, requester_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookRequest>(&query)
            .bind(book_id)
            .bind(requester_id)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BookRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM book_requests WHERE id = $1");
        sqlx::query_as::<_, BookRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests the user has made, newest first.
    pub async fn list_by_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<BookRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM book_requests
             WHERE requester_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BookRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }

    /// List requests against books the user owns, newest first.
    pub async fn list_incoming(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<BookRequest>, sqlx::Error> {
        let query = "SELECT r.id, r.book_id, r.requester_id, r.status, \
                     r.created_at, r.updated_at
             FROM book_requests r
             JOIN books b ON b.id = r.book_id
             WHERE b.owner_id = $1
             ORDER BY r.created_at DESC, r.id DESC";
        sqlx::query_as::<_, BookRequest>(query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Set a request's status, returning the updated row.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: RequestStatus,
    ) -> Result<Option<BookRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE book_requests SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookRequest>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}

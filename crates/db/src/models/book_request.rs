//! Book request entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gitshelf_core::book::RequestStatus;
use gitshelf_core::types::{DbId, Timestamp};

/// A request row from the `book_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookRequest {
    pub id: DbId,
    pub book_id: DbId,
    pub requester_id: DbId,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for updating a book request. Only the status is mutable,
/// and only by the book's owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookRequest {
    pub status: RequestStatus,
}

//! Book entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gitshelf_core::types::{DbId, Timestamp};

/// A book row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub author: String,
    pub condition: Option<String>,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_true() -> bool {
    true
}

/// Request body for creating a book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub condition: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Request body for updating a book. All fields optional.
///
/// `condition` follows write-if-present semantics: omitting it (or sending
/// null) keeps the stored value, so a condition can be changed but not
/// cleared. Clearing would need a sentinel or a `Option<Option<_>>` field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub condition: Option<String>,
    pub is_available: Option<bool>,
}

//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gitshelf_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// `google_id` is the identity provider's stable subject identifier; it is
/// how bearer tokens are mapped back to a local account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub google_id: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user from a verified identity-provider profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub google_id: String,
}

//! Repository for the `books` table.

use sqlx::PgPool;

use gitshelf_core::types::DbId;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list for books queries.
const COLUMNS: &str = "id, owner_id, title, author, condition, is_available, \
    created_at, updated_at";

/// Provides CRUD operations for shared books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (owner_id, title, author, condition, is_available)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.condition)
            .bind(input.is_available)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all currently available books, newest first (collector browsing).
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE is_available = TRUE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// List all books owned by a user, newest first (donor shelf).
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Absent fields keep their current values.
    ///
    /// COALESCE cannot distinguish "absent" from "null", so a set
    /// `condition` can only be replaced, never cleared back to null.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                condition = COALESCE($4, condition),
                is_available = COALESCE($5, is_available),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.condition)
            .bind(input.is_available)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `projects` table.
//!
//! Besides plain CRUD this exposes the guarded status writes the import
//! engine relies on: each advance is conditional on the row still holding
//! the expected precondition status, so a delete or an administrative
//! override mid-chain silently stops the chain instead of resurrecting or
//! clobbering the row.

use sqlx::PgPool;

use gitshelf_core::import::ImportStatus;
use gitshelf_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list for projects queries.
const COLUMNS: &str = "id, owner_id, display_name, source_url, result_url, status, \
    include_history, install_dependencies, create_replit, error_message, \
    created_at, updated_at";

/// Provides CRUD and guarded status operations for import projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in `pending` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        display_name: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (owner_id, display_name, source_url,
                 include_history, install_dependencies, create_replit)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(display_name)
            .bind(&input.source_url)
            .bind(input.include_history)
            .bind(input.install_dependencies)
            .bind(input.create_replit)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects owned by a user, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial administrative update (status, result_url,
    /// error_message). Absent fields keep their current values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                status = COALESCE($2, status),
                result_url = COALESCE($3, result_url),
                error_message = COALESCE($4, error_message),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.status)
            .bind(&input.result_url)
            .bind(&input.error_message)
            .fetch_optional(pool)
            .await
    }

    /// Advance the status only if the row still holds `from`.
    ///
    /// Returns `true` when the transition was applied. A missing row or a
    /// status that no longer matches the precondition both return `false`;
    /// the caller treats either as "stop advancing".
    pub async fn advance_status(
        pool: &PgPool,
        id: DbId,
        from: ImportStatus,
        to: ImportStatus,
        result_url: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                status = $3,
                result_url = COALESCE($4, result_url),
                updated_at = NOW()
             WHERE id = $1 AND status = $2",
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .bind(result_url)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a project `failed` with an error message, unless it already
    /// reached a terminal state or was deleted.
    pub async fn mark_failed(
        pool: &PgPool,
        id: DbId,
        error_message: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                status = 'failed',
                error_message = $2,
                updated_at = NOW()
             WHERE id = $1 AND status IN ('pending', 'cloning', 'setting_up')",
        )
        .bind(id)
        .bind(error_message)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

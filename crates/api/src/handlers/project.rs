//! Handlers for the `/projects` resource.
//!
//! All operations are owner-scoped. A project that exists but belongs to a
//! different user is reported as 404, not 403, so non-owners cannot probe
//! for existence.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use gitshelf_core::error::CoreError;
use gitshelf_core::github;
use gitshelf_core::types::DbId;
use gitshelf_db::models::project::{CreateProject, Project, UpdateProject};
use gitshelf_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fetch a project and enforce the owner match, collapsing both "missing"
/// and "not yours" into NotFound.
async fn ensure_owned_project(
    pool: &sqlx::PgPool,
    id: DbId,
    owner_id: DbId,
) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(pool, id).await?;
    match project {
        Some(p) if p.owner_id == owner_id => Ok(p),
        _ => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })),
    }
}

/// POST /api/v1/projects
///
/// Validates the source URL, persists the project in `pending`, and kicks
/// off the import pipeline before returning. The response carries the
/// freshly created row; clients observe progress by polling the list.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let display_name = github::derive_display_name(&input.source_url)?;

    let project = ProjectRepo::create(&state.pool, auth.user_id, &display_name, &input).await?;

    state.engine.start(project.id, &project.display_name);

    tracing::info!(
        project_id = project.id,
        owner_id = auth.user_id,
        display_name = %project.display_name,
        "Created import project"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// The authenticated owner's projects, newest first.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(projects))
}

/// PATCH /api/v1/projects/{id}
///
/// Administrative override of the status triple (status, result_url,
/// error_message). The request body rejects any other field.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    ensure_owned_project(&state.pool, id, auth.user_id).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Permitted from any status. An in-flight pipeline notices the missing row
/// at its next step and stops; nothing resurrects the project.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_owned_project(&state.pool, id, auth.user_id).await?;

    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, owner_id = auth.user_id, "Deleted project");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

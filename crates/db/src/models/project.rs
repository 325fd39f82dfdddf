//! Project (GitHub import) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gitshelf_core::import::ImportStatus;
use gitshelf_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// `status` is only ever advanced by the import engine in normal flow;
/// PATCH permits administrative override. `result_url` is populated on the
/// transition to `ready`, `error_message` on the transition to `failed`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub display_name: String,
    pub source_url: String,
    pub result_url: Option<String>,
    pub status: ImportStatus,
    pub include_history: bool,
    pub install_dependencies: bool,
    pub create_replit: bool,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_true() -> bool {
    true
}

/// Request body for creating a project. The import options are recorded for
/// display only and do not alter the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub source_url: String,
    #[serde(default = "default_true")]
    pub include_history: bool,
    #[serde(default = "default_true")]
    pub install_dependencies: bool,
    #[serde(default)]
    pub create_replit: bool,
}

/// Request body for PATCHing a project. Restricted to the status triple;
/// any other field in the payload is rejected outright.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProject {
    pub status: Option<ImportStatus>,
    pub result_url: Option<String>,
    pub error_message: Option<String>,
}

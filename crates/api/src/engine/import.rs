//! Import status engine.
//!
//! Drives a newly created project through `pending -> cloning -> setting_up
//! -> ready` on fixed delays without blocking the creation request. Each
//! project gets one spawned task that walks the step table; before every
//! write it re-reads the row and only applies the transition when the
//! precondition status still holds. A row deleted mid-sequence makes the
//! remaining steps no-ops, never errors, and never resurrects the row; an
//! administrative override (including `failed`) stops the chain the same
//! way.
//!
//! Chains for different projects are fully independent; per-row write
//! ordering is handled by the conditional UPDATE in the repository.

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use gitshelf_core::import::ImportStatus;
use gitshelf_core::types::DbId;
use gitshelf_db::repositories::ProjectRepo;

use crate::config::ImportDelays;

/// Drives project status simulations. One instance per process, shared via
/// [`crate::state::AppState`].
pub struct ImportEngine {
    pool: PgPool,
    delays: ImportDelays,
    cancel: CancellationToken,
}

/// Why a pipeline task stopped before reaching `ready`.
#[derive(Debug)]
enum StopReason {
    Deleted,
    StatusDiverged(ImportStatus),
    WriteError(sqlx::Error),
    Cancelled,
}

impl ImportEngine {
    pub fn new(pool: PgPool, delays: ImportDelays) -> Self {
        Self {
            pool,
            delays,
            cancel: CancellationToken::new(),
        }
    }

    /// Kick off the staged simulation for a freshly persisted `pending`
    /// project. Called exactly once per project, immediately after the
    /// creation insert; returns without blocking.
    ///
    /// The returned handle is only needed by tests that want to await the
    /// full sequence.
    pub fn start(&self, project_id: DbId, display_name: &str) -> JoinHandle<()> {
        let pool = self.pool.clone();
        let delays = self.delays;
        let cancel = self.cancel.clone();
        let result_url = hosted_project_url(display_name);

        tracing::info!(project_id, "Import pipeline started");

        tokio::spawn(async move {
            match run_pipeline(&pool, project_id, &result_url, delays, cancel).await {
                Ok(()) => {
                    tracing::info!(project_id, "Import pipeline completed");
                }
                Err(StopReason::Deleted) => {
                    tracing::debug!(project_id, "Import pipeline stopped: project deleted");
                }
                Err(StopReason::StatusDiverged(status)) => {
                    tracing::debug!(
                        project_id,
                        status = status.as_str(),
                        "Import pipeline stopped: status changed out of band"
                    );
                }
                Err(StopReason::WriteError(e)) => {
                    tracing::error!(project_id, error = %e, "Import pipeline failed");
                    // Best effort; the row may be gone or already terminal.
                    let _ = ProjectRepo::mark_failed(
                        &pool,
                        project_id,
                        "Import failed due to an internal error",
                    )
                    .await;
                }
                Err(StopReason::Cancelled) => {
                    tracing::debug!(project_id, "Import pipeline stopped: shutting down");
                }
            }
        })
    }

    /// Stop all in-flight pipelines at their next step boundary.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

/// Canonical hosted-project URL populated when an import reaches `ready`.
fn hosted_project_url(display_name: &str) -> String {
    format!("https://replit.com/@user/{display_name}")
}

/// Walk the step table for one project.
async fn run_pipeline(
    pool: &PgPool,
    project_id: DbId,
    result_url: &str,
    delays: ImportDelays,
    cancel: CancellationToken,
) -> Result<(), StopReason> {
    let steps = [
        (delays.to_cloning, ImportStatus::Pending, ImportStatus::Cloning, None),
        (delays.to_setting_up, ImportStatus::Cloning, ImportStatus::SettingUp, None),
        (delays.to_ready, ImportStatus::SettingUp, ImportStatus::Ready, Some(result_url)),
    ];

    for (delay, from, to, result_url) in steps {
        tokio::select! {
            _ = cancel.cancelled() => return Err(StopReason::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }

        // Re-read before writing: the row may be gone or overridden.
        let current = ProjectRepo::find_by_id(pool, project_id)
            .await
            .map_err(StopReason::WriteError)?;
        let current = current.ok_or(StopReason::Deleted)?;
        if current.status != from {
            return Err(StopReason::StatusDiverged(current.status));
        }

        // The conditional write closes the window between the read above and
        // this update; rows_affected == 0 means we lost that race.
        let advanced = ProjectRepo::advance_status(pool, project_id, from, to, result_url)
            .await
            .map_err(StopReason::WriteError)?;
        if !advanced {
            let status = ProjectRepo::find_by_id(pool, project_id)
                .await
                .map_err(StopReason::WriteError)?
                .map(|p| p.status);
            return Err(match status {
                None => StopReason::Deleted,
                Some(s) => StopReason::StatusDiverged(s),
            });
        }

        tracing::debug!(
            project_id,
            from = from.as_str(),
            to = to.as_str(),
            "Import status advanced"
        );
    }

    Ok(())
}

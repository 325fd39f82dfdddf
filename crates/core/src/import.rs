//! Import status state machine and progress-step derivation.
//!
//! A project moves through `pending -> cloning -> setting_up -> ready` on a
//! time-driven schedule, or terminates early in `failed`. `ready` and
//! `failed` are terminal. The step-derivation helpers here back the client
//! poller's 4-step checklist and are pure.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project import.
///
/// Stored in Postgres as the `import_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "import_status", rename_all = "snake_case")]
pub enum ImportStatus {
    Pending,
    Cloning,
    SettingUp,
    Ready,
    Failed,
}

impl ImportStatus {
    /// The next status in the automatic sequence, or `None` from a terminal
    /// state. `failed` is only ever entered explicitly, never via `next`.
    pub fn next(self) -> Option<ImportStatus> {
        match self {
            ImportStatus::Pending => Some(ImportStatus::Cloning),
            ImportStatus::Cloning => Some(ImportStatus::SettingUp),
            ImportStatus::SettingUp => Some(ImportStatus::Ready),
            ImportStatus::Ready | ImportStatus::Failed => None,
        }
    }

    /// Whether no further automatic transition occurs from this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, ImportStatus::Ready | ImportStatus::Failed)
    }

    /// Whether an import with this status is still in flight (the poller's
    /// selection criterion).
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            ImportStatus::Pending | ImportStatus::Cloning | ImportStatus::SettingUp
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImportStatus::Pending => "pending",
            ImportStatus::Cloning => "cloning",
            ImportStatus::SettingUp => "setting_up",
            ImportStatus::Ready => "ready",
            ImportStatus::Failed => "failed",
        }
    }
}

/// One entry in the fixed 4-step progress checklist.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImportStep {
    pub status: ImportStatus,
    pub label: &'static str,
    pub description: &'static str,
}

/// The ordered checklist rendered by the import progress card.
pub const IMPORT_STEPS: [ImportStep; 4] = [
    ImportStep {
        status: ImportStatus::Pending,
        label: "Validating Repository",
        description: "Checking repository access and permissions",
    },
    ImportStep {
        status: ImportStatus::Cloning,
        label: "Cloning Repository",
        description: "Downloading repository files and history",
    },
    ImportStep {
        status: ImportStatus::SettingUp,
        label: "Setting up Environment",
        description: "Installing dependencies and configuring project",
    },
    ImportStep {
        status: ImportStatus::Ready,
        label: "Creating Hosted Project",
        description: "Finalizing project setup and configuration",
    },
];

/// Display state of a single checklist step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// Derive the display state of `step` given the project's current status.
///
/// Pure index comparison against [`IMPORT_STEPS`]: earlier steps are
/// `Completed`, the matching step is `Active`, later steps are `Pending`.
/// A current status outside the checklist (`failed`) marks every step
/// `Pending`.
pub fn step_state(step: ImportStatus, current: ImportStatus) -> StepState {
    let index_of = |status| IMPORT_STEPS.iter().position(|s| s.status == status);

    let Some(current_index) = index_of(current) else {
        return StepState::Pending;
    };
    let Some(step_index) = index_of(step) else {
        return StepState::Pending;
    };

    if step_index < current_index {
        StepState::Completed
    } else if step_index == current_index {
        StepState::Active
    } else {
        StepState::Pending
    }
}

/// Select the import the progress card should track: the first project, in
/// the given order, whose status is still in flight.
pub fn active_import<T>(projects: &[T], status: impl Fn(&T) -> ImportStatus) -> Option<&T> {
    projects.iter().find(|p| status(p).is_in_flight())
}

//! Backlog ordering and per-project state.

use serde::{Deserialize, Serialize};

use crate::models::Project;

/// Lifecycle of a project inside one run.
///
/// ```text
/// Pending ──fill ok──▶ Completed
///    │
///    └─fill short──▶ Retrying(1) ─▶ … ─▶ Retrying(max) ──fill short──▶ Abandoned
/// ```
///
/// The retry budget is charged per project name: projects sharing a name
/// share one budget, so `Retrying(n)` counts requeues of that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectState {
    /// Not attempted yet.
    #[default]
    Pending,
    /// Requeued; `n` requeues charged to the project's name so far.
    Retrying(u32),
    /// Fully staffed.
    Completed,
    /// Retry budget exhausted.
    Abandoned,
}

impl ProjectState {
    /// Requeues used so far.
    pub fn retries(&self) -> u32 {
        match self {
            ProjectState::Retrying(n) => *n,
            _ => 0,
        }
    }

    /// Whether the project has left the backlog for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectState::Completed | ProjectState::Abandoned)
    }

    /// State after a short staffing.
    ///
    /// `retries` is the number of requeues already charged to the
    /// project's name.
    pub fn after_failure(retries: u32, max_retries: u32) -> Self {
        if retries < max_retries {
            ProjectState::Retrying(retries + 1)
        } else {
            ProjectState::Abandoned
        }
    }
}

/// Builds the initial backlog as project indices.
///
/// Projects are sorted ascending by `(role count, best_before)`, ties
/// keeping input order. The backlog is consumed from the back, so the
/// project with the most roles and latest deadline goes first.
pub fn initial_backlog(projects: &[Project]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..projects.len()).collect();
    indices.sort_by_key(|&i| (projects[i].role_count(), projects[i].best_before));
    indices
}

/// Reinserts a project at `position`, clamped to the backlog length.
pub fn requeue(backlog: &mut Vec<usize>, project: usize, position: usize) {
    let at = position.min(backlog.len());
    backlog.insert(at, project);
}

//! Assignment result model.

use serde::{Deserialize, Serialize};

/// A completed project with one contributor per role.
///
/// `contributors[i]` staffs the project's `i`-th role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Completed project name.
    pub project: String,
    /// Assigned contributor names, in role order.
    pub contributors: Vec<String>,
}

impl AssignmentResult {
    /// Creates a new result.
    pub fn new(project: impl Into<String>, contributors: Vec<String>) -> Self {
        Self {
            project: project.into(),
            contributors,
        }
    }

    /// Number of staffed roles.
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Whether no roles were staffed (only for role-less projects).
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Whether a contributor works on this project.
    pub fn contains(&self, contributor: &str) -> bool {
        self.contributors.iter().any(|c| c == contributor)
    }
}

//! Project model.
//!
//! A project is a fixed set of roles that must all be staffed at once.
//! Roles are order-significant: they are filled in declaration order,
//! and a contributor chosen for an earlier role can mentor a later one.

use serde::{Deserialize, Serialize};

/// A project's need for one contributor with a minimum skill level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Required skill name.
    pub skill: String,
    /// Minimum required level.
    pub level: i32,
}

impl Role {
    /// Creates a new role.
    pub fn new(skill: impl Into<String>, level: i32) -> Self {
        Self {
            skill: skill.into(),
            level,
        }
    }

    /// The same role with its level lowered by one (mentored hiring).
    ///
    /// Saturates at `i32::MIN`.
    pub fn relaxed(&self) -> Self {
        Self {
            skill: self.skill.clone(),
            level: self.level.saturating_sub(1),
        }
    }
}

/// A project to be staffed.
///
/// Immutable after loading. `days`, `score` and `best_before` do not
/// influence candidate choice; `best_before` only participates in the
/// initial backlog ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Duration in days.
    pub days: i64,
    /// Score awarded on completion.
    pub score: i64,
    /// "Best before" day.
    pub best_before: i64,
    /// Roles in declaration order.
    pub roles: Vec<Role>,
}

impl Project {
    /// Creates a project with no roles and zeroed attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: 0,
            score: 0,
            best_before: 0,
            roles: Vec::new(),
        }
    }

    /// Sets the duration (days).
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Sets the score.
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Sets the best-before day.
    pub fn with_best_before(mut self, best_before: i64) -> Self {
        self.best_before = best_before;
        self
    }

    /// Appends a role.
    pub fn with_role(mut self, skill: impl Into<String>, level: i32) -> Self {
        self.roles.push(Role::new(skill, level));
        self
    }

    /// Number of roles.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Whether this project has any roles.
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }
}

//! Contributor model.
//!
//! Contributors are the people staffed onto project roles. Each one
//! carries an initial list of skills with integer proficiency levels.
//! Levels observed during a run live in a [`ContributorPool`]; the
//! `Contributor` record itself never changes after loading.
//!
//! [`ContributorPool`]: super::ContributorPool

use serde::{Deserialize, Serialize};

/// A named skill with proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (e.g., "python", "design", "go").
    pub name: String,
    /// Proficiency level (higher = more proficient).
    ///
    /// Signed so that a relaxed requirement one level below zero can be
    /// expressed. Loaded values are non-negative.
    pub level: i32,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// A contributor available for staffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor name.
    pub name: String,
    /// Initial skills with proficiency levels.
    pub skills: Vec<Skill>,
}

impl Contributor {
    /// Creates a contributor with no skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: Vec::new(),
        }
    }

    /// Adds a skill.
    pub fn with_skill(mut self, name: impl Into<String>, level: i32) -> Self {
        self.skills.push(Skill::new(name, level));
        self
    }

    /// Initial level for a skill (0 if not listed).
    ///
    /// When a skill is listed twice the later entry wins, matching how
    /// the pool builds its level table.
    pub fn initial_level(&self, skill: &str) -> i32 {
        self.skills
            .iter()
            .rev()
            .find(|s| s.name == skill)
            .map(|s| s.level)
            .unwrap_or(0)
    }
}

/// Position of a contributor inside its [`ContributorPool`].
///
/// Only meaningful for the pool that issued it.
///
/// [`ContributorPool`]: super::ContributorPool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContributorId(pub usize);

impl ContributorId {
    /// Raw index into the pool.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

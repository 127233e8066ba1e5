//! Contributor pool: the per-run skill table.
//!
//! The pool owns the contributors of one run together with their current
//! levels. It is the only mutable state of the engine. Levels only ever
//! grow, and a skill a contributor has never used reads as level 0.

use std::collections::HashMap;

use super::{Contributor, ContributorId};

/// Contributors of one run with their mutable skill levels.
#[derive(Debug, Clone, Default)]
pub struct ContributorPool {
    contributors: Vec<Contributor>,
    levels: Vec<HashMap<String, i32>>,
}

impl ContributorPool {
    /// Builds a pool from contributors, in the given order.
    pub fn new(contributors: Vec<Contributor>) -> Self {
        let levels = contributors
            .iter()
            .map(|c| {
                c.skills
                    .iter()
                    .map(|s| (s.name.clone(), s.level))
                    .collect::<HashMap<_, _>>()
            })
            .collect();
        Self {
            contributors,
            levels,
        }
    }

    /// Number of contributors.
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// All contributor ids, in pool order.
    pub fn ids(&self) -> impl Iterator<Item = ContributorId> + '_ {
        (0..self.contributors.len()).map(ContributorId)
    }

    /// The contributor record behind an id.
    pub fn contributor(&self, id: ContributorId) -> &Contributor {
        &self.contributors[id.index()]
    }

    /// Contributor name.
    pub fn name(&self, id: ContributorId) -> &str {
        &self.contributors[id.index()].name
    }

    /// Looks up a contributor by name.
    pub fn find(&self, name: &str) -> Option<ContributorId> {
        self.contributors
            .iter()
            .position(|c| c.name == name)
            .map(ContributorId)
    }

    /// Current level of a contributor in a skill (0 if never recorded).
    pub fn level(&self, id: ContributorId, skill: &str) -> i32 {
        self.levels[id.index()].get(skill).copied().unwrap_or(0)
    }

    /// Whether a contributor currently meets a requirement.
    ///
    /// A requirement at or below zero is met by everyone, including
    /// contributors without any record of the skill.
    #[inline]
    pub fn meets(&self, id: ContributorId, skill: &str, min_level: i32) -> bool {
        self.level(id, skill) >= min_level
    }

    /// Raises a contributor's level in a skill by one and returns the new level.
    ///
    /// Saturates at `i32::MAX`.
    pub fn improve(&mut self, id: ContributorId, skill: &str) -> i32 {
        let level = self.levels[id.index()]
            .entry(skill.to_string())
            .or_insert(0);
        *level = level.saturating_add(1);
        *level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> ContributorPool {
        ContributorPool::new(vec![
            Contributor::new("A").with_skill("python", 3),
            Contributor::new("B").with_skill("python", 1).with_skill("go", 2),
        ])
    }

    #[test]
    fn test_pool_lookup() {
        let pool = sample_pool();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
        let b = pool.find("B").unwrap();
        assert_eq!(b, ContributorId(1));
        assert_eq!(pool.name(b), "B");
        assert_eq!(pool.contributor(b).skills.len(), 2);
        assert!(pool.find("Z").is_none());
    }

    #[test]
    fn test_absent_skill_defaults_to_zero() {
        let pool = sample_pool();
        let a = pool.find("A").unwrap();
        assert_eq!(pool.level(a, "go"), 0);
        assert!(pool.meets(a, "go", 0));
        assert!(pool.meets(a, "go", -1));
        assert!(!pool.meets(a, "go", 1));
    }

    #[test]
    fn test_improve_creates_and_grows() {
        let mut pool = sample_pool();
        let a = pool.find("A").unwrap();
        assert_eq!(pool.improve(a, "go"), 1);
        assert_eq!(pool.improve(a, "python"), 4);
        assert_eq!(pool.level(a, "go"), 1);
        assert_eq!(pool.level(a, "python"), 4);
    }

    #[test]
    fn test_improve_leaves_records_untouched() {
        let mut pool = sample_pool();
        let a = pool.find("A").unwrap();
        pool.improve(a, "python");
        assert_eq!(pool.contributor(a).initial_level("python"), 3);
        assert_eq!(pool.level(a, "python"), 4);
    }

    #[test]
    fn test_improve_saturates_at_max_level() {
        let mut pool =
            ContributorPool::new(vec![Contributor::new("A").with_skill("go", i32::MAX)]);
        let a = pool.find("A").unwrap();
        assert_eq!(pool.improve(a, "go"), i32::MAX);
        assert_eq!(pool.level(a, "go"), i32::MAX);
    }

    #[test]
    fn test_empty_pool() {
        let pool = ContributorPool::new(Vec::new());
        assert!(pool.is_empty());
        assert_eq!(pool.ids().count(), 0);
    }
}

//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Default number of requeues before a project is abandoned.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default backlog index a failed project is reinserted at.
pub const DEFAULT_REQUEUE_POSITION: usize = 1;

/// Tunables of the project scheduler.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Requeues allowed per project before it is abandoned.
    pub max_retries: u32,
    /// Index (from the front) a failed project is reinserted at.
    ///
    /// The backlog is consumed from the back, so small values postpone
    /// the retry until most of the backlog has been processed. Clamped to
    /// the backlog length.
    pub requeue_position: usize,
    /// Seed for candidate choice. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            requeue_position: DEFAULT_REQUEUE_POSITION,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the requeue position.
    pub fn with_requeue_position(mut self, position: usize) -> Self {
        self.requeue_position = position;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SchedulerConfig::default();
        assert_eq!(c.max_retries, 5);
        assert_eq!(c.requeue_position, 1);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn test_builder() {
        let c = SchedulerConfig::new()
            .with_max_retries(2)
            .with_requeue_position(0)
            .with_seed(11);
        assert_eq!(c.max_retries, 2);
        assert_eq!(c.requeue_position, 0);
        assert_eq!(c.seed, Some(11));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: SchedulerConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(c, SchedulerConfig::new().with_seed(3));
    }
}

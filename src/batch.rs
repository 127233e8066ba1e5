//! Independent batch runs.
//!
//! Instances share nothing, so each one gets its own pool and random
//! source and they run in parallel on the rayon thread pool. With a
//! configured seed, instance `i` uses `seed + i`, keeping every run
//! reproducible regardless of thread scheduling.

use rayon::prelude::*;
use tracing::info;

use crate::scheduler::{ProjectScheduler, SchedulerConfig, StaffingOutcome, StaffingRequest};

/// Per-instance configuration derived from the batch configuration.
pub fn instance_config(config: &SchedulerConfig, index: usize) -> SchedulerConfig {
    SchedulerConfig {
        seed: config.seed.map(|s| s.wrapping_add(index as u64)),
        ..config.clone()
    }
}

/// Solves every request in parallel. Outcomes are returned in input order.
pub fn solve_batch(requests: &[StaffingRequest], config: &SchedulerConfig) -> Vec<StaffingOutcome> {
    info!(instances = requests.len(), "starting batch");
    requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| {
            ProjectScheduler::with_config(instance_config(config, index)).solve_request(request)
        })
        .collect()
}

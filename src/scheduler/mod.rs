//! Project scheduling and run metrics.
//!
//! Drives the staffing engine over a backlog of projects: ordering,
//! per-project staffing, skill growth on success, and the bounded
//! requeue loop for projects that could not be fully staffed.
//!
//! # Algorithm
//!
//! `ProjectScheduler` is a single-pass greedy heuristic with limited
//! backtracking. It does not search for an optimal assignment and never
//! considers scores or durations when choosing contributors.
//!
//! # KPI
//!
//! `StaffingKpi` summarizes a run: completion rate, retries, nominal
//! score and how often each contributor was staffed.

mod backlog;
mod config;
mod greedy;
mod kpi;

pub use backlog::{initial_backlog, requeue, ProjectState};
pub use config::{SchedulerConfig, DEFAULT_MAX_RETRIES, DEFAULT_REQUEUE_POSITION};
pub use greedy::{
    apply_skill_progression, ProjectScheduler, StaffingOutcome, StaffingRequest,
};
pub use kpi::StaffingKpi;

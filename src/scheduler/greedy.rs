//! Greedy project scheduler with bounded retries.
//!
//! # Algorithm
//!
//! 1. Sort projects ascending by (role count, best-before) and consume
//!    the backlog from the back.
//! 2. Staff the popped project role by role (see [`crate::staffing`]).
//! 3. Fully staffed: grow the skills of contributors working at or
//!    above their level, record the result.
//! 4. Short: requeue near the front of the backlog, or abandon once the
//!    retry budget is spent.
//!
//! One project is fully resolved, skill growth included, before the next
//! one is popped.
//!
//! # Complexity
//! O(p * k * r * (r + c)) where p=projects, k=max retries + 1,
//! r=roles/project, c=contributors.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, info_span};

use super::backlog::{initial_backlog, requeue, ProjectState};
use super::SchedulerConfig;
use crate::models::{AssignmentResult, Contributor, ContributorId, ContributorPool, Project};
use crate::selection::RandomSource;
use crate::staffing::fill_roles;

/// Input container for one staffing run.
#[derive(Debug, Clone, Default)]
pub struct StaffingRequest {
    /// Available contributors, in input order.
    pub contributors: Vec<Contributor>,
    /// Projects to staff, in input order.
    pub projects: Vec<Project>,
}

impl StaffingRequest {
    /// Creates a new request.
    pub fn new(contributors: Vec<Contributor>, projects: Vec<Project>) -> Self {
        Self {
            contributors,
            projects,
        }
    }
}

/// Output of one staffing run.
#[derive(Debug, Clone, Default)]
pub struct StaffingOutcome {
    /// Completed projects, in completion order.
    pub results: Vec<AssignmentResult>,
    /// Final state per project (index-aligned with the input projects).
    pub states: Vec<ProjectState>,
    /// Staffing attempts per project (index-aligned with the input projects).
    pub attempts: Vec<u32>,
    /// Total number of single-level skill increases applied.
    pub skill_increments: usize,
}

impl StaffingOutcome {
    /// Number of completed projects.
    pub fn completed_count(&self) -> usize {
        self.results.len()
    }

    /// Number of abandoned projects.
    pub fn abandoned_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == ProjectState::Abandoned)
            .count()
    }

    /// Finds the result for a project.
    pub fn result_for(&self, project: &str) -> Option<&AssignmentResult> {
        self.results.iter().find(|r| r.project == project)
    }
}

/// Applies learning after a fully staffed project.
///
/// Each contributor whose current level in its role's skill is at or
/// below the role's level gains one level. Returns the number of
/// increases applied.
pub fn apply_skill_progression(
    pool: &mut ContributorPool,
    project: &Project,
    staffing: &[ContributorId],
) -> usize {
    let mut increments = 0;
    for (&id, role) in staffing.iter().zip(&project.roles) {
        if pool.level(id, &role.skill) <= role.level {
            let level = pool.improve(id, &role.skill);
            debug!(
                contributor = pool.name(id),
                skill = %role.skill,
                level,
                "skill improved"
            );
            increments += 1;
        }
    }
    increments
}

/// Greedy project staffing engine.
///
/// # Example
///
/// ```
/// use u_staffing::models::{Contributor, Project};
/// use u_staffing::scheduler::{ProjectScheduler, SchedulerConfig, StaffingRequest};
///
/// let request = StaffingRequest::new(
///     vec![
///         Contributor::new("Anna").with_skill("c++", 2),
///         Contributor::new("Bob").with_skill("html", 5).with_skill("css", 5),
///     ],
///     vec![Project::new("Logging").with_best_before(5).with_role("c++", 3)
///         .with_role("html", 3)],
/// );
///
/// let scheduler = ProjectScheduler::with_config(SchedulerConfig::new().with_seed(1));
/// let outcome = scheduler.solve_request(&request);
/// assert_eq!(outcome.completed_count(), 0);
/// assert_eq!(outcome.abandoned_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectScheduler {
    config: SchedulerConfig,
}

impl ProjectScheduler {
    /// Creates a scheduler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the engine against an existing pool.
    ///
    /// Levels in `pool` grow in place as projects complete.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        projects: &[Project],
        pool: &mut ContributorPool,
        rng: &mut R,
    ) -> StaffingOutcome {
        let _span = info_span!(
            "staffing.run",
            projects = projects.len(),
            contributors = pool.len()
        )
        .entered();

        let mut backlog = initial_backlog(projects);
        let mut outcome = StaffingOutcome {
            results: Vec::new(),
            states: vec![ProjectState::Pending; projects.len()],
            attempts: vec![0; projects.len()],
            skill_increments: 0,
        };
        let mut retries_by_name: HashMap<&str, u32> = HashMap::new();

        while let Some(idx) = backlog.pop() {
            let project = &projects[idx];
            outcome.attempts[idx] += 1;

            let staffing = fill_roles(project, pool, rng);
            if staffing.len() == project.role_count() {
                outcome.skill_increments += apply_skill_progression(pool, project, &staffing);
                let names = staffing.iter().map(|&id| pool.name(id).to_string()).collect();
                outcome.results.push(AssignmentResult::new(&project.name, names));
                outcome.states[idx] = ProjectState::Completed;
                debug!(
                    project = %project.name,
                    attempt = outcome.attempts[idx],
                    "project completed"
                );
                continue;
            }

            let retries = retries_by_name.entry(project.name.as_str()).or_insert(0);
            let next = ProjectState::after_failure(*retries, self.config.max_retries);
            *retries = next.retries().max(*retries);
            outcome.states[idx] = next;
            match next {
                ProjectState::Retrying(retries) => {
                    requeue(&mut backlog, idx, self.config.requeue_position);
                    debug!(
                        project = %project.name,
                        filled = staffing.len(),
                        roles = project.role_count(),
                        retries,
                        "project requeued"
                    );
                }
                _ => debug!(
                    project = %project.name,
                    attempts = outcome.attempts[idx],
                    "project abandoned"
                ),
            }
        }

        info!(
            completed = outcome.completed_count(),
            abandoned = outcome.abandoned_count(),
            skill_increments = outcome.skill_increments,
            "staffing run finished"
        );
        outcome
    }

    /// Builds a fresh pool and random source, then runs the engine.
    ///
    /// The source is seeded from the configuration when a seed is set.
    pub fn solve(&self, contributors: &[Contributor], projects: &[Project]) -> StaffingOutcome {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut pool = ContributorPool::new(contributors.to_vec());
        self.run(projects, &mut pool, &mut rng)
    }

    /// Solves a request.
    pub fn solve_request(&self, request: &StaffingRequest) -> StaffingOutcome {
        self.solve(&request.contributors, &request.projects)
    }
}

//! Staffing run metrics (KPIs).
//!
//! Summarizes a finished run against its input projects. Purely
//! descriptive: none of these numbers feed back into assignment.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completed | Projects fully staffed |
//! | Abandoned | Projects dropped after exhausting retries |
//! | Completion Rate | completed / total projects |
//! | Total Retries | Sum of requeues across all projects |
//! | Nominal Score | Sum of `score` over completed projects |
//! | Projects per Contributor | How often each contributor was staffed |

use std::collections::HashMap;

use super::greedy::StaffingOutcome;
use crate::models::Project;

/// Staffing run indicators.
#[derive(Debug, Clone)]
pub struct StaffingKpi {
    /// Fully staffed projects.
    pub completed: usize,
    /// Projects dropped after exhausting retries.
    pub abandoned: usize,
    /// Fraction of projects completed (0.0..1.0).
    pub completion_rate: f64,
    /// Total requeues across all projects.
    pub total_retries: u32,
    /// Sum of scores of completed projects, ignoring deadlines.
    pub nominal_score: i64,
    /// Skill levels gained during the run.
    pub skill_increments: usize,
    /// Number of completed projects each contributor worked on.
    pub projects_per_contributor: HashMap<String, usize>,
}

impl StaffingKpi {
    /// Computes KPIs from an outcome and the projects it was run on.
    ///
    /// # Arguments
    /// * `outcome` - The finished run.
    /// * `projects` - The input projects (for scores and totals).
    pub fn calculate(outcome: &StaffingOutcome, projects: &[Project]) -> Self {
        let scores: HashMap<&str, i64> = projects
            .iter()
            .map(|p| (p.name.as_str(), p.score))
            .collect();

        let mut nominal_score = 0;
        let mut projects_per_contributor: HashMap<String, usize> = HashMap::new();
        for result in &outcome.results {
            nominal_score += scores.get(result.project.as_str()).copied().unwrap_or(0);
            for name in &result.contributors {
                *projects_per_contributor.entry(name.clone()).or_insert(0) += 1;
            }
        }

        // Every attempt after the first was a requeue.
        let total_retries = outcome
            .attempts
            .iter()
            .map(|&a| a.saturating_sub(1))
            .sum();

        let completed = outcome.completed_count();
        let completion_rate = if projects.is_empty() {
            1.0
        } else {
            completed as f64 / projects.len() as f64
        };

        Self {
            completed,
            abandoned: outcome.abandoned_count(),
            completion_rate,
            total_retries,
            nominal_score,
            skill_increments: outcome.skill_increments,
            projects_per_contributor,
        }
    }
}

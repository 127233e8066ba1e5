//! Skill-constrained team formation for the U-Engine ecosystem.
//!
//! Staffs projects from a finite pool of contributors. Each project
//! needs one contributor per role, every role asking for a minimum level
//! in one skill. Working on a project teaches: contributors staffed at or
//! above their level gain one level in that skill, and a teammate who
//! already masters a skill lets the engine hire one level below the
//! requirement.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Contributor`, `Skill`, `Project`, `Role`,
//!   `ContributorPool`, `AssignmentResult`
//! - **`selection`**: Random candidate choice behind a pluggable `RandomSource`
//! - **`staffing`**: Role filling with mentor-relaxed hiring
//! - **`scheduler`**: Backlog ordering, bounded retries, skill growth, KPIs
//! - **`validation`**: Input integrity checks (duplicate names, empty projects)
//! - **`io`**: Text instance reader and result writer
//! - **`batch`**: Parallel runs over independent instances
//! - **`telemetry`**: Tracing subscriber setup for binaries
//!
//! # Architecture
//!
//! The engine is a single-pass greedy heuristic with bounded retries,
//! not an exact solver. A run owns its `ContributorPool`; nothing is
//! shared between runs, which is what makes `batch` trivially parallel.
//!
//! # Example
//!
//! ```
//! use u_staffing::models::{Contributor, Project};
//! use u_staffing::scheduler::{ProjectScheduler, SchedulerConfig};
//!
//! let contributors = vec![
//!     Contributor::new("M").with_skill("go", 5),
//!     Contributor::new("N").with_skill("go", 2),
//! ];
//! let projects = vec![Project::new("P").with_role("go", 3).with_role("go", 2)];
//!
//! let outcome = ProjectScheduler::with_config(SchedulerConfig::new().with_seed(0))
//!     .solve(&contributors, &projects);
//! assert_eq!(outcome.results[0].contributors, vec!["M", "N"]);
//! ```

pub mod batch;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod selection;
pub mod staffing;
pub mod telemetry;
pub mod validation;

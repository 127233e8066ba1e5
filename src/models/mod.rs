//! Staffing domain models.
//!
//! Provides the data types for team-formation problems: who is
//! available, what each project needs, and what the engine produced.
//!
//! # Domain Mappings
//!
//! | u-staffing | Hackathon | Consulting | Film Crew |
//! |------------|-----------|------------|-----------|
//! | Contributor | Participant | Consultant | Crew Member |
//! | Project | Challenge | Engagement | Production |
//! | Role | Team Slot | Seat | Position |
//! | AssignmentResult | Team | Staffing Plan | Call Sheet |

mod assignment;
mod contributor;
mod pool;
mod project;

pub use assignment::AssignmentResult;
pub use contributor::{Contributor, ContributorId, Skill};
pub use pool::ContributorPool;
pub use project::{Project, Role};

//! Candidate selection.
//!
//! Picks one contributor meeting a `(skill, minimum level)` requirement
//! from the pool, skipping contributors already on the team. The choice
//! among eligible contributors is uniform and comes from a pluggable
//! [`RandomSource`], so assignments spread across the pool instead of
//! always landing on the strongest contributor.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_staffing::models::{Contributor, ContributorPool};
//! use u_staffing::selection::select_candidate;
//!
//! let pool = ContributorPool::new(vec![
//!     Contributor::new("A").with_skill("python", 3),
//!     Contributor::new("B").with_skill("python", 1),
//! ]);
//! let mut rng = StdRng::seed_from_u64(7);
//! let picked = select_candidate(&pool, "python", 2, &[], &mut rng);
//! assert_eq!(picked, pool.find("A"));
//! ```

mod source;

pub use source::{FirstCandidate, RandomSource, ScriptedSource};

use tracing::trace;

use crate::models::{ContributorId, ContributorPool};

/// Returns every contributor meeting the requirement and not excluded, in pool order.
pub fn eligible_candidates(
    pool: &ContributorPool,
    skill: &str,
    min_level: i32,
    excluded: &[ContributorId],
) -> Vec<ContributorId> {
    pool.ids()
        .filter(|&id| pool.meets(id, skill, min_level) && !excluded.contains(&id))
        .collect()
}

/// Selects one eligible contributor uniformly at random.
///
/// A contributor is eligible when its current level in `skill` is at
/// least `min_level` and it is not in `excluded`. A `min_level` at or
/// below zero is met by every contributor, including those who have
/// never recorded the skill.
///
/// Returns `None` when nobody is eligible. This is an ordinary outcome,
/// not an error. The pool is not modified.
pub fn select_candidate<R: RandomSource + ?Sized>(
    pool: &ContributorPool,
    skill: &str,
    min_level: i32,
    excluded: &[ContributorId],
    rng: &mut R,
) -> Option<ContributorId> {
    let candidates = eligible_candidates(pool, skill, min_level, excluded);
    if candidates.is_empty() {
        trace!(skill, min_level, "no eligible candidate");
        return None;
    }

    let picked = candidates[rng.choose_index(candidates.len())];
    trace!(
        skill,
        min_level,
        eligible = candidates.len(),
        contributor = pool.name(picked),
        "candidate selected"
    );
    Some(picked)
}

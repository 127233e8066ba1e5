//! Role filling with mentorship.
//!
//! # Algorithm
//!
//! Roles are processed strictly in declaration order, growing a
//! `selected` team that doubles as the exclusion list:
//!
//! 1. Look for a mentor: a team member whose current level in the
//!    role's skill already meets the requirement.
//! 2. With a mentor present, first try to hire at one level below the
//!    requirement.
//! 3. Otherwise, or if that finds nobody, hire at the full requirement.
//! 4. A role nobody can fill is skipped; later roles are still attempted.
//!
//! The caller decides success by comparing the team size with the role
//! count.
//!
//! # Complexity
//! O(r * (r + c)) where r=roles, c=contributors.

use tracing::trace;

use crate::models::{ContributorId, ContributorPool, Project, Role};
use crate::selection::{select_candidate, RandomSource};

/// Finds a team member able to mentor `role`.
///
/// Returns the first member (in selection order) whose current level in
/// the role's skill is at least the role's level.
pub fn find_mentor(
    selected: &[ContributorId],
    pool: &ContributorPool,
    role: &Role,
) -> Option<ContributorId> {
    selected
        .iter()
        .copied()
        .find(|&id| pool.meets(id, &role.skill, role.level))
}

/// Staffs a single role given the team assembled so far.
pub fn fill_role<R: RandomSource + ?Sized>(
    role: &Role,
    selected: &[ContributorId],
    pool: &ContributorPool,
    rng: &mut R,
) -> Option<ContributorId> {
    let mentored = find_mentor(selected, pool, role).and_then(|mentor| {
        let relaxed = role.relaxed();
        trace!(
            skill = %role.skill,
            mentor = pool.name(mentor),
            relaxed_level = relaxed.level,
            "mentor on team, trying relaxed hire"
        );
        select_candidate(pool, &relaxed.skill, relaxed.level, selected, &mut *rng)
    });

    mentored.or_else(|| select_candidate(pool, &role.skill, role.level, selected, rng))
}

/// Attempts to staff every role of a project.
///
/// Returns the contributors chosen, in role order of the roles that
/// could be filled. The result is shorter than `project.roles` when some
/// role went unfilled. The pool is not modified.
pub fn fill_roles<R: RandomSource + ?Sized>(
    project: &Project,
    pool: &ContributorPool,
    rng: &mut R,
) -> Vec<ContributorId> {
    let mut selected = Vec::with_capacity(project.role_count());

    for role in &project.roles {
        match fill_role(role, &selected, pool, rng) {
            Some(id) => selected.push(id),
            None => trace!(
                project = %project.name,
                skill = %role.skill,
                level = role.level,
                "role left unfilled"
            ),
        }
    }

    selected
}

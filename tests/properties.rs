use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::collections::HashSet;

use u_staffing::models::{Contributor, ContributorPool, Project};
use u_staffing::scheduler::{ProjectScheduler, ProjectState, SchedulerConfig};
use u_staffing::selection::select_candidate;

const SKILLS: [&str; 4] = ["go", "rust", "sql", "css"];

fn contributor_strategy() -> impl Strategy<Value = Vec<Contributor>> {
    prop::collection::vec(prop::collection::vec((0usize..4, 0i32..6), 0..4), 1..8).prop_map(
        |people| {
            people
                .into_iter()
                .enumerate()
                .map(|(i, skills)| {
                    skills
                        .into_iter()
                        .fold(Contributor::new(format!("c{i}")), |c, (s, l)| {
                            c.with_skill(SKILLS[s], l)
                        })
                })
                .collect()
        },
    )
}

fn project_strategy() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(
        (0i64..30, prop::collection::vec((0usize..4, 0i32..6), 1..4)),
        0..8,
    )
    .prop_map(|projects| {
        projects
            .into_iter()
            .enumerate()
            .map(|(i, (best_before, roles))| {
                roles.into_iter().fold(
                    Project::new(format!("p{i}"))
                        .with_days(1)
                        .with_best_before(best_before),
                    |p, (s, l)| p.with_role(SKILLS[s], l),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_results_fully_staffed_without_repeats(
        contributors in contributor_strategy(),
        projects in project_strategy(),
        seed in any::<u64>(),
    ) {
        let outcome = ProjectScheduler::with_config(SchedulerConfig::new().with_seed(seed))
            .solve(&contributors, &projects);

        for result in &outcome.results {
            let project = projects.iter().find(|p| p.name == result.project).unwrap();
            prop_assert_eq!(result.len(), project.role_count());
            let unique: HashSet<&String> = result.contributors.iter().collect();
            prop_assert_eq!(unique.len(), result.len());
        }
    }

    #[test]
    fn test_levels_never_decrease(
        contributors in contributor_strategy(),
        projects in project_strategy(),
        seed in any::<u64>(),
    ) {
        let mut pool = ContributorPool::new(contributors.clone());
        let mut rng = StdRng::seed_from_u64(seed);
        ProjectScheduler::new().run(&projects, &mut pool, &mut rng);

        for (i, c) in contributors.iter().enumerate() {
            let id = pool.ids().nth(i).unwrap();
            for skill in SKILLS {
                prop_assert!(pool.level(id, skill) >= c.initial_level(skill));
            }
        }
    }

    #[test]
    fn test_abandoned_projects_absent_from_results(
        contributors in contributor_strategy(),
        projects in project_strategy(),
        seed in any::<u64>(),
    ) {
        let outcome = ProjectScheduler::with_config(SchedulerConfig::new().with_seed(seed))
            .solve(&contributors, &projects);

        for (i, state) in outcome.states.iter().enumerate() {
            prop_assert!(state.is_terminal());
            let present = outcome.result_for(&projects[i].name).is_some();
            match state {
                ProjectState::Completed => prop_assert!(present),
                ProjectState::Abandoned => {
                    prop_assert!(!present);
                    prop_assert_eq!(outcome.attempts[i], 6);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_seeded_runs_identical(
        contributors in contributor_strategy(),
        projects in project_strategy(),
        seed in any::<u64>(),
    ) {
        let scheduler = ProjectScheduler::with_config(SchedulerConfig::new().with_seed(seed));
        let first = scheduler.solve(&contributors, &projects);
        let second = scheduler.solve(&contributors, &projects);
        prop_assert_eq!(first.results, second.results);
        prop_assert_eq!(first.states, second.states);
    }

    #[test]
    fn test_selection_respects_exclusion(
        contributors in contributor_strategy(),
        skill in 0usize..4,
        level in -1i32..6,
        excluded_mask in any::<u8>(),
        seed in any::<u64>(),
    ) {
        let pool = ContributorPool::new(contributors);
        let excluded: Vec<_> = pool
            .ids()
            .filter(|id| excluded_mask & (1 << (id.index() % 8)) != 0)
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);

        if let Some(id) = select_candidate(&pool, SKILLS[skill], level, &excluded, &mut rng) {
            prop_assert!(!excluded.contains(&id));
            prop_assert!(pool.level(id, SKILLS[skill]) >= level);
        }
    }
}

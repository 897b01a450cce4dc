//! Skill-group reassignment move (neighborhood N¹).
//!
//! # Algorithm
//!
//! 1. Decode the gene vector
//! 2. Zero every cell of the persons holding the skill (releases their
//!    whole capacity, since each person has exactly one skill)
//! 3. Shuffle the skill's persons once
//! 4. For each project in ascending order, walk the shuffled candidates and
//!    give each the largest level that fits both the remaining requirement
//!    and the candidate's remaining capacity, until the requirement is met
//! 5. Re-encode
//!
//! Candidates whose remaining capacity is below the smallest positive level
//! are skipped; that slack is left unused.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Genes, TeamProblem};

/// Slack allowed when fitting a level under a requirement or capacity bound.
const LEVEL_FIT_TOLERANCE: f64 = 1e-5;

/// How candidates are ordered across the projects of one reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShufflePolicy {
    /// Shuffle once; every project sees the same candidate order.
    #[default]
    Once,
    /// Reshuffle before each project with a positive requirement.
    PerProject,
}

/// Rebuilds the allocation of one skill group from scratch.
///
/// Returns a new gene vector; `genes` is left untouched. Every person of
/// the group ends with total dedication `<= 1`. Genes of other skill groups
/// are copied unchanged, except that indices beyond the last level are
/// clipped to it by the decode/encode round trip.
///
/// # Panics
///
/// Panics if `genes.len() != H·P` or `skill >= K`.
///
/// # Examples
///
/// ```
/// use u_teamform::model::TeamProblem;
/// use u_teamform::neighborhood::reassign_skill_group;
/// use u_teamform::rng::create_rng;
///
/// let problem = TeamProblem::builder(2, 1, 1)
///     .affinity(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
///     .requirements(vec![vec![1.5]])
///     .skill_of_person(vec![0, 0])
///     .build()
///     .unwrap();
/// let mut rng = create_rng(1);
/// let genes = reassign_skill_group(&problem, &problem.empty_genes(), 0, &mut rng);
/// let total: f64 = problem.decode(&genes).project_total(0);
/// assert!((total - 1.5).abs() < 1e-9);
/// ```
pub fn reassign_skill_group<R: Rng>(
    problem: &TeamProblem,
    genes: &[usize],
    skill: usize,
    rng: &mut R,
) -> Genes {
    reassign_skill_group_with(problem, genes, skill, ShufflePolicy::Once, rng)
}

/// [`reassign_skill_group`] with an explicit candidate shuffle policy.
pub fn reassign_skill_group_with<R: Rng>(
    problem: &TeamProblem,
    genes: &[usize],
    skill: usize,
    policy: ShufflePolicy,
    rng: &mut R,
) -> Genes {
    let mut allocation = problem.decode(genes);
    let group = problem.skill_group(skill);
    for &person in group {
        allocation.clear_person(person);
    }

    let Some(min_level) = problem.min_nonzero_level() else {
        return problem.encode(&allocation);
    };

    let mut candidates = group.to_vec();
    candidates.shuffle(rng);
    let mut remaining = vec![1.0_f64; problem.n_people()];

    for project in 0..problem.n_projects() {
        let required = problem.requirement(skill, project);
        if required <= 0.0 {
            continue;
        }
        if policy == ShufflePolicy::PerProject {
            candidates.shuffle(rng);
        }

        let mut filled = 0.0;
        for &person in &candidates {
            if filled >= required {
                break;
            }
            let capacity = remaining[person];
            if capacity < min_level {
                continue;
            }

            let bound = (required - filled).min(capacity);
            let level = problem.largest_level_within(bound, LEVEL_FIT_TOLERANCE);
            if level > 0.0 {
                allocation.set(person, project, level);
                filled += level;
                remaining[person] -= level;
            }
        }
    }

    problem.encode(&allocation)
}

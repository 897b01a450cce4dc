//! Skill-decomposition constructive heuristic.

use rand::Rng;

use super::reassign::reassign_skill_group;
use crate::model::{Genes, TeamProblem};

/// Builds a solution from scratch, one skill group at a time.
///
/// Starting from the all-zero gene vector, applies
/// [`reassign_skill_group`] to skills `0..K` in ascending order. The result
/// always respects person capacity; requirements are met as far as the
/// per-project greedy fill manages.
pub fn construct_solution<R: Rng>(problem: &TeamProblem, rng: &mut R) -> Genes {
    (0..problem.n_skills()).fold(problem.empty_genes(), |genes, skill| {
        reassign_skill_group(problem, &genes, skill, rng)
    })
}

//! Skill-block genetic operators.
//!
//! Operators take and return whole batches (one row per individual) so an
//! external driver can call them once per generation. Each row must be a
//! gene vector of length H·P.
//!
//! # Crossover Operators
//!
//! - [`block_crossover`]: per skill, swap the complete block of that skill's
//!   persons between the two children with probability 0.5
//!
//! # Mutation Operators
//!
//! - [`block_mutation`]: rebuild one random skill group (an N¹ move)

use rand::Rng;

use super::config::clamp_probability;
use crate::model::{Genes, TeamProblem};
use crate::neighborhood::{construct_solution, reassign_skill_group};

/// Probability that a skill block is swapped during crossover.
const BLOCK_SWAP_PROB: f64 = 0.5;

/// Draws `n` independent constructive solutions.
pub fn sample_population<R: Rng>(problem: &TeamProblem, n: usize, rng: &mut R) -> Vec<Genes> {
    (0..n).map(|_| construct_solution(problem, rng)).collect()
}

/// Uniform skill-block crossover.
///
/// Children start as copies of their parents. With probability `prob` the
/// pair is recombined: for every skill, with probability 0.5, the genes of
/// all persons holding that skill are exchanged between the children.
/// Since every person has exactly one skill, each child's rows come intact
/// from one parent.
///
/// `prob` is clamped into `[0, 1]` (NaN becomes 0) with a warning. Pass
/// [`crossover_prob`](super::GaOperatorConfig::crossover_prob) to use the
/// configured value.
///
/// # Examples
///
/// ```
/// use u_teamform::ga::{block_crossover, sample_population, GaOperatorConfig};
/// use u_teamform::generator::{generate_instance, GeneratorConfig};
/// use u_teamform::rng::create_rng;
///
/// let problem = generate_instance(&GeneratorConfig::default().with_seed(1)).unwrap();
/// let config = GaOperatorConfig::default();
/// let mut rng = create_rng(3);
/// let pop = sample_population(&problem, 2, &mut rng);
/// let pairs = vec![(pop[0].clone(), pop[1].clone())];
/// let children = block_crossover(&problem, &pairs, config.crossover_prob, &mut rng);
/// assert_eq!(children.len(), 1);
/// ```
///
/// # Panics
/// Panics if any parent's length differs from H·P.
pub fn block_crossover<R: Rng>(
    problem: &TeamProblem,
    pairs: &[(Genes, Genes)],
    prob: f64,
    rng: &mut R,
) -> Vec<(Genes, Genes)> {
    let prob = clamp_probability("ga.crossover_prob", prob);
    pairs
        .iter()
        .map(|(a, b)| {
            assert_row_len(problem, a);
            assert_row_len(problem, b);
            let mut child1 = a.clone();
            let mut child2 = b.clone();

            if rng.random::<f64>() < prob {
                for skill in 0..problem.n_skills() {
                    if rng.random::<f64>() < BLOCK_SWAP_PROB {
                        for idx in problem.skill_gene_indices(skill) {
                            child1[idx] = b[idx];
                            child2[idx] = a[idx];
                        }
                    }
                }
            }
            (child1, child2)
        })
        .collect()
}

/// Skill-group mutation.
///
/// Each individual is, with probability `prob`, replaced by the result of
/// rebuilding one uniformly chosen skill group; otherwise it is copied.
/// `prob` is clamped like in [`block_crossover`]; see
/// [`GaOperatorConfig::mutation_prob`](super::GaOperatorConfig::mutation_prob).
///
/// # Panics
/// Panics if any individual's length differs from H·P.
pub fn block_mutation<R: Rng>(
    problem: &TeamProblem,
    population: &[Genes],
    prob: f64,
    rng: &mut R,
) -> Vec<Genes> {
    let prob = clamp_probability("ga.mutation_prob", prob);
    population
        .iter()
        .map(|individual| {
            assert_row_len(problem, individual);
            if rng.random::<f64>() < prob {
                let skill = rng.random_range(0..problem.n_skills());
                reassign_skill_group(problem, individual, skill, rng)
            } else {
                individual.clone()
            }
        })
        .collect()
}

fn assert_row_len(problem: &TeamProblem, row: &[usize]) {
    assert_eq!(
        row.len(),
        problem.n_genes(),
        "batch row has length {}, expected H·P = {}",
        row.len(),
        problem.n_genes()
    );
}

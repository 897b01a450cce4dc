//! Deterministic project-oriented greedy heuristic.
//!
//! # Algorithm
//!
//! For each project, then each skill, walk the skill's persons in instance
//! order and give each the largest dedication level that fits both their
//! remaining capacity and the residual requirement. No randomness is
//! involved: the same instance always yields the same solution.

use std::time::Instant;

use crate::model::{Allocation, TeamProblem};
use crate::result::{Method, SolveResult};

/// Residual requirement treated as met.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Slack when fitting a level under the bound.
const LEVEL_TOLERANCE: f64 = 1e-9;

/// Greedy runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds the greedy solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teamform::generator::{generate_instance, GeneratorConfig};
    /// use u_teamform::greedy::GreedyRunner;
    ///
    /// let problem = generate_instance(&GeneratorConfig::default().with_seed(8)).unwrap();
    /// let a = GreedyRunner::run(&problem);
    /// let b = GreedyRunner::run(&problem);
    /// assert_eq!(a.genes, b.genes);
    /// assert!(a.history.is_empty());
    /// ```
    pub fn run(problem: &TeamProblem) -> SolveResult {
        let start = Instant::now();
        let allocation = Self::allocate(problem);
        let genes = problem.encode(&allocation);

        let result =
            SolveResult::from_genes(problem, genes, Method::Greedy, Vec::new(), start.elapsed())
                .with_iterations(1);
        result.log_summary();
        result
    }

    fn allocate(problem: &TeamProblem) -> Allocation {
        let mut allocation = Allocation::zeros(problem.n_people(), problem.n_projects());

        for project in 0..problem.n_projects() {
            for skill in 0..problem.n_skills() {
                let mut residual = problem.requirement(skill, project);
                if residual <= 0.0 {
                    continue;
                }

                for &person in problem.skill_group(skill) {
                    if residual <= RESIDUAL_TOLERANCE {
                        break;
                    }
                    let total = allocation.person_total(person);
                    if total >= 1.0 - RESIDUAL_TOLERANCE {
                        continue;
                    }

                    let bound = (1.0 - total).min(residual);
                    let level = problem.largest_level_within(bound, LEVEL_TOLERANCE);
                    if level > 0.0 {
                        allocation.set(person, project, level);
                        residual -= level;
                    }
                }
            }
        }

        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_instance, GeneratorConfig};

    #[test]
    fn test_greedy_fills_in_instance_order() {
        let p = TeamProblem::builder(3, 2, 1)
            .affinity(vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ])
            .requirements(vec![vec![1.25, 0.5]])
            .skill_of_person(vec![0, 0, 0])
            .build()
            .unwrap();
        let result = GreedyRunner::run(&p);
        let a = p.decode(&result.genes);
        // Project 0: person 0 gets 1.0, person 1 gets 0.25; project 1:
        // person 0 is full, person 1 gets 0.5.
        assert_eq!(a.row(0), &[1.0, 0.0]);
        assert_eq!(a.row(1), &[0.25, 0.5]);
        assert_eq!(a.row(2), &[0.0, 0.0]);
        assert!(result.feasible);
    }

    #[test]
    fn test_greedy_deterministic_and_capacity_feasible() {
        for seed in 0..10 {
            let p = generate_instance(&GeneratorConfig::default().with_seed(seed)).unwrap();
            let a = GreedyRunner::run(&p);
            let b = GreedyRunner::run(&p);
            assert_eq!(a.genes, b.genes);
            assert_eq!(a.seed, None);
            let alloc = p.decode(&a.genes);
            assert!(alloc.person_totals().iter().all(|&t| t <= 1.0 + 1e-9));
        }
    }

    #[test]
    fn test_greedy_floors_to_fitting_level() {
        let p = TeamProblem::builder(1, 1, 1)
            .affinity(vec![vec![1.0]])
            .requirements(vec![vec![0.6]])
            .skill_of_person(vec![0])
            .build()
            .unwrap();
        let result = GreedyRunner::run(&p);
        assert_eq!(result.genes, vec![2]);
    }
}

//! Hill Climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Build an initial solution with the constructive heuristic
//! 2. For each outer iteration:
//!    a. Draw up to `sample_size` neighbors (random skill, N¹ move)
//!    b. Move to the first neighbor that strictly improves
//!    c. If none improves, stop: the current solution is a local optimum
//! 3. Return the current solution (always the best seen)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use super::config::HillConfig;
use crate::model::TeamProblem;
use crate::neighborhood::{construct_solution, reassign_skill_group};
use crate::result::{Method, SolveResult};
use crate::rng::{create_rng, resolve_seed};

/// Hill Climbing runner.
pub struct HillRunner;

impl HillRunner {
    /// Executes Hill Climbing from a constructive starting solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teamform::generator::{generate_instance, GeneratorConfig};
    /// use u_teamform::hill::{HillConfig, HillRunner};
    ///
    /// let problem = generate_instance(&GeneratorConfig::default().with_seed(2)).unwrap();
    /// let result = HillRunner::run(&problem, &HillConfig::default().with_seed(1));
    /// assert_eq!(result.history.len(), result.iterations + 1);
    /// ```
    pub fn run(problem: &TeamProblem, config: &HillConfig) -> SolveResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Hill Climbing with an optional cancellation token, checked once
    /// per outer iteration.
    pub fn run_with_cancel(
        problem: &TeamProblem,
        config: &HillConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        let start = Instant::now();
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let max_iterations = config.effective_max_iterations();
        let sample_size = config.effective_sample_size();

        let mut current = construct_solution(problem, &mut rng);
        let mut current_eff = problem.efficiency(&current);

        let mut history = Vec::with_capacity(max_iterations + 1);
        history.push(current_eff);
        let mut iterations = 0;
        let mut cancelled = false;

        for iteration in 0..max_iterations {
            if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                cancelled = true;
                break;
            }

            let mut improved = false;
            for _ in 0..sample_size {
                let skill = rng.random_range(0..problem.n_skills());
                let neighbor = reassign_skill_group(problem, &current, skill, &mut rng);
                let neighbor_eff = problem.efficiency(&neighbor);
                if neighbor_eff > current_eff {
                    current = neighbor;
                    current_eff = neighbor_eff;
                    improved = true;
                    tracing::debug!(
                        method = "hill",
                        iteration,
                        efficiency = current_eff,
                        "new best"
                    );
                    break;
                }
            }

            iterations += 1;
            history.push(current_eff);
            if !improved {
                break;
            }
        }

        let result = SolveResult::from_genes(
            problem,
            current,
            Method::HillClimbing,
            history,
            start.elapsed(),
        )
        .with_seed(seed)
        .with_iterations(iterations)
        .with_cancelled(cancelled);
        result.log_summary();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_instance, GeneratorConfig};

    fn problem() -> TeamProblem {
        generate_instance(
            &GeneratorConfig::default()
                .with_n_people(15)
                .with_n_projects(3)
                .with_n_skills(2)
                .with_seed(21),
        )
        .unwrap()
    }

    #[test]
    fn test_hill_history_strictly_improves_until_stall() {
        let p = problem();
        let result = HillRunner::run(&p, &HillConfig::default().with_seed(3));
        let h = &result.history;
        assert_eq!(h.len(), result.iterations + 1);
        // Every completed outer iteration but a final stalled one improves.
        for w in h[..h.len() - 1].windows(2) {
            assert!(w[1] > w[0]);
        }
        assert!(h[h.len() - 1] >= h[h.len() - 2]);
    }

    #[test]
    fn test_hill_reports_current_as_best() {
        let p = problem();
        let result = HillRunner::run(&p, &HillConfig::default().with_seed(8));
        let last = *result.history.last().unwrap();
        assert!((result.efficiency - last).abs() < 1e-12);
        assert_eq!(result.method, Method::HillClimbing);
    }

    #[test]
    fn test_hill_iteration_cap() {
        let p = problem();
        let config = HillConfig::default().with_max_iterations(2).with_seed(4);
        let result = HillRunner::run(&p, &config);
        assert!(result.iterations <= 2);
        assert!(result.history.len() <= 3);
    }

    #[test]
    fn test_hill_reproducible() {
        let p = problem();
        let config = HillConfig::default().with_seed(17);
        let a = HillRunner::run(&p, &config);
        let b = HillRunner::run(&p, &config);
        assert_eq!(a.genes, b.genes);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_hill_cancelled() {
        let p = problem();
        let flag = Arc::new(AtomicBool::new(true));
        let result =
            HillRunner::run_with_cancel(&p, &HillConfig::default().with_seed(1), Some(flag));
        assert!(result.cancelled);
        assert_eq!(result.history.len(), 1);
    }
}

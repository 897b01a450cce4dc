//! Random Search execution engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::RandomConfig;
use crate::model::TeamProblem;
use crate::neighborhood::construct_solution;
use crate::result::{Method, SolveResult};
use crate::rng::{create_rng, resolve_seed};

/// Random Search runner.
pub struct RandomRunner;

impl RandomRunner {
    /// Draws `budget` constructive solutions and returns the best.
    ///
    /// The history holds the running best after each draw (no initial entry).
    pub fn run(problem: &TeamProblem, config: &RandomConfig) -> SolveResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Random Search with an optional cancellation token, checked once
    /// per draw.
    pub fn run_with_cancel(
        problem: &TeamProblem,
        config: &RandomConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        let start = Instant::now();
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let budget = config.effective_budget();

        let mut best = problem.empty_genes();
        let mut best_eff = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(budget);
        let mut cancelled = false;

        for draw in 0..budget {
            if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                cancelled = true;
                break;
            }

            let candidate = construct_solution(problem, &mut rng);
            let eff = problem.efficiency(&candidate);
            if eff > best_eff {
                best = candidate;
                best_eff = eff;
                tracing::debug!(method = "random", iteration = draw, efficiency = eff, "new best");
            }
            history.push(best_eff);
        }

        let iterations = history.len();
        let result =
            SolveResult::from_genes(problem, best, Method::RandomSearch, history, start.elapsed())
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
        generate_instance(&GeneratorConfig::default().with_seed(14)).unwrap()
    }

    #[test]
    fn test_random_history_per_draw() {
        let p = problem();
        let result = RandomRunner::run(&p, &RandomConfig::default().with_budget(64).with_seed(1));
        assert_eq!(result.history.len(), 64);
        assert_eq!(result.iterations, 64);
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!((result.efficiency - result.history[63]).abs() < 1e-12);
    }

    #[test]
    fn test_random_first_draw_matches_constructive() {
        let p = problem();
        let result = RandomRunner::run(&p, &RandomConfig::default().with_budget(1).with_seed(5));
        let mut rng = create_rng(5);
        assert_eq!(result.genes, construct_solution(&p, &mut rng));
    }

    #[test]
    fn test_random_zero_budget_clamped() {
        let p = problem();
        let result = RandomRunner::run(&p, &RandomConfig::default().with_budget(0).with_seed(2));
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.method, Method::RandomSearch);
    }
}

//! Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build an initial solution with the constructive heuristic
//! 2. For each of `max_iterations` iterations:
//!    a. Pick a skill uniformly at random
//!    b. Rebuild that skill group (N¹ move)
//!    c. Accept the neighbor iff it strictly improves current efficiency
//! 3. Return the best solution seen

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use super::config::LsConfig;
use crate::model::{Genes, TeamProblem};
use crate::neighborhood::{construct_solution, reassign_skill_group};
use crate::result::{Method, SolveResult};
use crate::rng::{create_rng, resolve_seed};

/// Outcome of the [`improve`] subroutine.
#[derive(Debug, Clone)]
pub struct Improvement {
    /// Best solution found.
    pub genes: Genes,
    /// Efficiency of `genes`.
    pub efficiency: f64,
    /// Best efficiency: the starting value, then one entry per iteration.
    /// Empty when history recording is off.
    pub history: Vec<f64>,
    /// Iterations executed.
    pub iterations: usize,
    /// Whether the loop stopped on a cancellation request.
    pub cancelled: bool,
}

/// Improves `genes` by first-accept hill climbing in N¹.
///
/// Runs exactly `max_iterations` neighbor draws using the caller's
/// generator, accepting a neighbor only when it strictly improves the
/// current efficiency.
pub fn improve<R: Rng>(
    problem: &TeamProblem,
    genes: &[usize],
    max_iterations: usize,
    record_history: bool,
    rng: &mut R,
) -> Improvement {
    improve_until(problem, genes, max_iterations, record_history, None, rng)
}

fn improve_until<R: Rng>(
    problem: &TeamProblem,
    genes: &[usize],
    max_iterations: usize,
    record_history: bool,
    cancel: Option<&AtomicBool>,
    rng: &mut R,
) -> Improvement {
    let mut current = genes.to_vec();
    let mut current_eff = problem.efficiency(&current);
    let mut best = current.clone();
    let mut best_eff = current_eff;

    let mut history = Vec::new();
    if record_history {
        history.reserve(max_iterations + 1);
        history.push(best_eff);
    }

    let mut iterations = 0;
    let mut cancelled = false;

    for _ in 0..max_iterations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }

        let skill = rng.random_range(0..problem.n_skills());
        let neighbor = reassign_skill_group(problem, &current, skill, rng);
        let neighbor_eff = problem.efficiency(&neighbor);

        if neighbor_eff > current_eff {
            current = neighbor;
            current_eff = neighbor_eff;

            if current_eff > best_eff {
                best.clone_from(&current);
                best_eff = current_eff;
            }
        }

        iterations += 1;
        if record_history {
            history.push(best_eff);
        }
    }

    Improvement {
        genes: best,
        efficiency: best_eff,
        history,
        iterations,
        cancelled,
    }
}

/// Local Search runner.
pub struct LsRunner;

impl LsRunner {
    /// Executes Local Search from a constructive starting solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teamform::generator::{generate_instance, GeneratorConfig};
    /// use u_teamform::ls::{LsConfig, LsRunner};
    ///
    /// let problem = generate_instance(&GeneratorConfig::default().with_seed(1)).unwrap();
    /// let config = LsConfig::default().with_max_iterations(100).with_seed(42);
    /// let result = LsRunner::run(&problem, &config);
    /// assert_eq!(result.history.len(), 101);
    /// ```
    pub fn run(problem: &TeamProblem, config: &LsConfig) -> SolveResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Local Search with an optional cancellation token, checked once
    /// per iteration.
    pub fn run_with_cancel(
        problem: &TeamProblem,
        config: &LsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        let start = Instant::now();
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let initial = construct_solution(problem, &mut rng);
        let outcome = improve_until(
            problem,
            &initial,
            config.effective_max_iterations(),
            config.record_history,
            cancel.as_deref(),
            &mut rng,
        );

        let result = SolveResult::from_genes(
            problem,
            outcome.genes,
            Method::LocalSearch,
            outcome.history,
            start.elapsed(),
        )
        .with_seed(seed)
        .with_iterations(outcome.iterations)
        .with_cancelled(outcome.cancelled);
        result.log_summary();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_instance, GeneratorConfig};
    use crate::rng::create_rng;

    fn problem() -> TeamProblem {
        generate_instance(
            &GeneratorConfig::default()
                .with_n_people(12)
                .with_n_projects(3)
                .with_n_skills(3)
                .with_seed(5),
        )
        .unwrap()
    }

    #[test]
    fn test_improve_never_worsens() {
        let p = problem();
        let mut rng = create_rng(1);
        let start = construct_solution(&p, &mut rng);
        let start_eff = p.efficiency(&start);
        let out = improve(&p, &start, 200, true, &mut rng);
        assert!(out.efficiency >= start_eff);
        assert!((p.efficiency(&out.genes) - out.efficiency).abs() < 1e-12);
        assert_eq!(out.iterations, 200);
        assert_eq!(out.history.len(), 201);
        assert_eq!(out.history[0], start_eff);
    }

    #[test]
    fn test_improve_history_non_decreasing() {
        let p = problem();
        let mut rng = create_rng(2);
        let start = construct_solution(&p, &mut rng);
        let out = improve(&p, &start, 300, true, &mut rng);
        for w in out.history.windows(2) {
            assert!(w[1] >= w[0], "history decreased: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_improve_without_history() {
        let p = problem();
        let mut rng = create_rng(3);
        let start = p.empty_genes();
        let out = improve(&p, &start, 10, false, &mut rng);
        assert!(out.history.is_empty());
    }

    #[test]
    fn test_run_spends_full_budget() {
        let p = problem();
        let config = LsConfig::default().with_max_iterations(150).with_seed(42);
        let result = LsRunner::run(&p, &config);
        assert_eq!(result.iterations, 150);
        assert_eq!(result.history.len(), 151);
        assert_eq!(result.method, Method::LocalSearch);
        assert_eq!(result.seed, Some(42));
        assert!(!result.cancelled);
    }

    #[test]
    fn test_run_reproducible() {
        let p = problem();
        let config = LsConfig::default().with_max_iterations(100).with_seed(9);
        let a = LsRunner::run(&p, &config);
        let b = LsRunner::run(&p, &config);
        assert_eq!(a.genes, b.genes);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_run_cancelled_before_start() {
        let p = problem();
        let config = LsConfig::default().with_max_iterations(10_000).with_seed(1);
        let flag = Arc::new(AtomicBool::new(true));
        let result = LsRunner::run_with_cancel(&p, &config, Some(flag));
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.history.len(), 1);
    }
}

//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build an initial solution with the constructive heuristic
//! 2. At each iteration:
//!    a. Draw `n_candidates` skills with replacement and rebuild each one
//!    on the current solution
//!    b. Keep the best admissible neighbor: its skill is not tabu, or it
//!    beats the global best (aspiration)
//!    c. Move to it even if it is worse, and push its skill into memory
//!    d. Update the global best
//!    e. Every `restart_interval` iterations, restart from a fresh
//!    constructive solution with cleared memory
//! 3. Return the global best
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::model::{Genes, TeamProblem};
use crate::neighborhood::{construct_solution, reassign_skill_group};
use crate::result::{Method, SolveResult};
use crate::rng::{create_rng, resolve_seed};

/// Draws `n_candidates` skills with replacement and returns the best
/// admissible neighbor of `current` as `(skill, genes, efficiency)`.
///
/// A tabu skill is admissible only when its neighbor beats `best_eff`. The
/// winner is returned even if it is worse than `current`; `None` means every
/// candidate was tabu without aspiration.
fn select_move<R: Rng>(
    problem: &TeamProblem,
    current: &[usize],
    memory: &TabuMemory,
    best_eff: f64,
    n_candidates: usize,
    rng: &mut R,
) -> Option<(usize, Genes, f64)> {
    let mut chosen = None;
    let mut chosen_eff = f64::NEG_INFINITY;
    for _ in 0..n_candidates {
        let skill = rng.random_range(0..problem.n_skills());
        let neighbor = reassign_skill_group(problem, current, skill, rng);
        let neighbor_eff = problem.efficiency(&neighbor);

        let admissible = !memory.contains(skill) || neighbor_eff > best_eff;
        if admissible && neighbor_eff > chosen_eff {
            chosen_eff = neighbor_eff;
            chosen = Some((skill, neighbor));
        }
    }
    chosen.map(|(skill, genes)| (skill, genes, chosen_eff))
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from a constructive starting solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teamform::generator::{generate_instance, GeneratorConfig};
    /// use u_teamform::tabu::{TabuConfig, TabuRunner};
    ///
    /// let problem = generate_instance(&GeneratorConfig::default().with_seed(4)).unwrap();
    /// let config = TabuConfig::default().with_max_iterations(50).with_seed(42);
    /// let result = TabuRunner::run(&problem, &config);
    /// assert_eq!(result.history.len(), 51);
    /// ```
    pub fn run(problem: &TeamProblem, config: &TabuConfig) -> SolveResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token, checked once
    /// per iteration.
    pub fn run_with_cancel(
        problem: &TeamProblem,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        let start = Instant::now();
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let k = problem.n_skills();
        let max_iterations = config.effective_max_iterations();
        let n_candidates = config.effective_n_candidates(k);
        let restart_interval = config.effective_restart_interval();
        let mut memory = TabuMemory::new(config.effective_tabu_size(k));

        let mut current = construct_solution(problem, &mut rng);
        let mut best = current.clone();
        let mut best_eff = problem.efficiency(&current);

        let mut history = Vec::with_capacity(max_iterations + 1);
        history.push(best_eff);
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

            if let Some((skill, neighbor, chosen_eff)) =
                select_move(problem, &current, &memory, best_eff, n_candidates, &mut rng)
            {
                current = neighbor;
                memory.push(skill);
                if chosen_eff > best_eff {
                    best.clone_from(&current);
                    best_eff = chosen_eff;
                    tracing::debug!(
                        method = "tabu",
                        iteration,
                        efficiency = best_eff,
                        "new best"
                    );
                }
            }

            if iteration > 0 && iteration % restart_interval == 0 {
                tracing::trace!(iteration, "tabu restart");
                current = construct_solution(problem, &mut rng);
                memory.clear();
            }

            iterations += 1;
            history.push(best_eff);
        }

        let result =
            SolveResult::from_genes(problem, best, Method::TabuSearch, history, start.elapsed())
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
    use crate::neighborhood::construct_solution;

    fn problem() -> TeamProblem {
        generate_instance(
            &GeneratorConfig::default()
                .with_n_people(18)
                .with_n_projects(3)
                .with_n_skills(3)
                .with_seed(12),
        )
        .unwrap()
    }

    /// Two persons of one skill who like each other but not themselves; one
    /// project needs 1.0. Splitting 0.5/0.5 scores 0.75, any rebuild puts
    /// one person at 1.0 and scores 0.5.
    fn pair_problem() -> (TeamProblem, Genes) {
        let p = TeamProblem::builder(2, 1, 1)
            .affinity(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
            .requirements(vec![vec![1.0]])
            .skill_of_person(vec![0, 0])
            .build()
            .unwrap();
        let split = vec![2, 2];
        assert!((p.efficiency(&split) - 0.75).abs() < 1e-12);
        (p, split)
    }

    #[test]
    fn test_select_move_rejects_tabu_without_aspiration() {
        let (p, current) = pair_problem();
        let mut memory = TabuMemory::new(1);
        memory.push(0);
        let mut rng = create_rng(1);
        assert!(select_move(&p, &current, &memory, 0.75, 5, &mut rng).is_none());
    }

    #[test]
    fn test_select_move_aspiration_admits_tabu_skill() {
        let (p, current) = pair_problem();
        let mut memory = TabuMemory::new(1);
        memory.push(0);
        let mut rng = create_rng(1);
        let (skill, genes, eff) = select_move(&p, &current, &memory, 0.4, 5, &mut rng).unwrap();
        assert_eq!(skill, 0);
        assert!((eff - 0.5).abs() < 1e-12);
        assert!((p.efficiency(&genes) - eff).abs() < 1e-12);
    }

    #[test]
    fn test_select_move_returns_worsening_neighbor() {
        let (p, current) = pair_problem();
        let memory = TabuMemory::new(1);
        for seed in 0..10 {
            let mut rng = create_rng(seed);
            let (_, genes, eff) =
                select_move(&p, &current, &memory, 0.75, 3, &mut rng).unwrap();
            assert!(eff < p.efficiency(&current));
            assert_ne!(genes, current);
        }
    }

    #[test]
    fn test_tabu_history_non_decreasing() {
        let p = problem();
        let config = TabuConfig::default().with_max_iterations(120).with_seed(42);
        let result = TabuRunner::run(&p, &config);
        assert_eq!(result.history.len(), 121);
        assert_eq!(result.iterations, 120);
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0], "best decreased: {} -> {}", w[0], w[1]);
        }
        let last = *result.history.last().unwrap();
        assert!((result.efficiency - last).abs() < 1e-12);
    }

    #[test]
    fn test_tabu_not_worse_than_start() {
        let p = problem();
        let config = TabuConfig::default().with_max_iterations(60).with_seed(5);
        let result = TabuRunner::run(&p, &config);

        let mut rng = create_rng(5);
        let start = construct_solution(&p, &mut rng);
        assert!(result.efficiency >= p.efficiency(&start) - 1e-12);
        assert_eq!(result.history[0], p.efficiency(&start));
    }

    #[test]
    fn test_tabu_survives_restarts() {
        let p = problem();
        let config = TabuConfig::default()
            .with_max_iterations(40)
            .with_restart_interval(5)
            .with_n_candidates(3)
            .with_seed(9);
        let result = TabuRunner::run(&p, &config);
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_tabu_single_skill_clamped() {
        // K = 1 with tabu size 1: the only skill is tabu after the first move
        // and is admissible again only through aspiration.
        let p = generate_instance(
            &GeneratorConfig::default()
                .with_n_people(6)
                .with_n_projects(2)
                .with_n_skills(1)
                .with_seed(3),
        )
        .unwrap();
        let config = TabuConfig::default()
            .with_max_iterations(30)
            .with_tabu_size(4)
            .with_seed(1);
        let result = TabuRunner::run(&p, &config);
        assert_eq!(result.history.len(), 31);
        assert!(result.efficiency.is_finite());
    }

    #[test]
    fn test_tabu_reproducible() {
        let p = problem();
        let config = TabuConfig::default().with_max_iterations(30).with_seed(77);
        let a = TabuRunner::run(&p, &config);
        let b = TabuRunner::run(&p, &config);
        assert_eq!(a.genes, b.genes);
        assert_eq!(a.history, b.history);
    }
}

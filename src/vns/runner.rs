//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (Basic VNS)
//!
//! 1. Build an initial solution x with the constructive heuristic, k = 1
//! 2. While the iteration and time budgets last:
//!    a. **Shaking**: rebuild `min(k, K)` distinct random skills of x → x'
//!    b. **Local search**: improve x' for `ls_max_iterations` → x''
//!    c. **Move or not**: if f(x'') > f(x), set x = x'' and k = 1;
//!    otherwise k = k + 1, wrapping to 1 when k > K
//! 3. Return the best solution found
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::seq::index;
use rand::Rng;

use super::config::VnsConfig;
use crate::ls::improve;
use crate::model::{Genes, TeamProblem};
use crate::neighborhood::{construct_solution, reassign_skill_group};
use crate::result::{Method, SolveResult};
use crate::rng::{create_rng, resolve_seed};

/// Rebuilds `min(k, K)` distinct random skills in sequence (neighborhood N^k).
///
/// `k = 0` returns a copy of `genes`.
pub fn shake<R: Rng>(problem: &TeamProblem, genes: &[usize], k: usize, rng: &mut R) -> Genes {
    let n_skills = problem.n_skills();
    let amount = k.min(n_skills);
    let mut shaken = genes.to_vec();
    for skill in index::sample(rng, n_skills, amount).into_vec() {
        shaken = reassign_skill_group(problem, &shaken, skill, rng);
    }
    shaken
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes Basic VNS from a constructive starting solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teamform::generator::{generate_instance, GeneratorConfig};
    /// use u_teamform::vns::{VnsConfig, VnsRunner};
    ///
    /// let problem = generate_instance(&GeneratorConfig::default().with_seed(6)).unwrap();
    /// let config = VnsConfig::default().with_max_iterations(20).with_seed(42);
    /// let result = VnsRunner::run(&problem, &config);
    /// assert_eq!(result.history.len(), 21);
    /// assert!(result.extra.contains_key("final_k"));
    /// ```
    pub fn run(problem: &TeamProblem, config: &VnsConfig) -> SolveResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs VNS with an optional cancellation token, checked once per
    /// iteration together with the time limit.
    pub fn run_with_cancel(
        problem: &TeamProblem,
        config: &VnsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        let start = Instant::now();
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let n_skills = problem.n_skills();
        let max_iterations = config.effective_max_iterations();
        let ls_iterations = config.effective_ls_max_iterations();
        let time_limit = config.time_limit();

        let mut current = construct_solution(problem, &mut rng);
        let mut current_eff = problem.efficiency(&current);
        let mut best = current.clone();
        let mut best_eff = current_eff;

        let mut history = Vec::with_capacity(max_iterations + 1);
        history.push(best_eff);
        let mut k = 1;
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
            if time_limit.is_some_and(|limit| start.elapsed() > limit) {
                break;
            }

            let shaken = shake(problem, &current, k, &mut rng);
            let improved = improve(problem, &shaken, ls_iterations, false, &mut rng);

            if improved.efficiency > current_eff {
                current = improved.genes;
                current_eff = improved.efficiency;
                k = 1;

                if current_eff > best_eff {
                    best.clone_from(&current);
                    best_eff = current_eff;
                    tracing::debug!(
                        method = "vns",
                        iteration,
                        efficiency = best_eff,
                        "new best"
                    );
                }
            } else {
                k += 1;
                if k > n_skills {
                    k = 1;
                }
            }

            iterations += 1;
            history.push(best_eff);
        }

        let result = SolveResult::from_genes(
            problem,
            best,
            Method::VariableNeighborhoodSearch,
            history,
            start.elapsed(),
        )
        .with_seed(seed)
        .with_iterations(iterations)
        .with_cancelled(cancelled)
        .with_extra("final_k", k as f64);
        result.log_summary();
        result
    }
}

//! Batch execution of independent search runs.
//!
//! A benchmark is a list of [`RunTask`]s, each naming one strategy, its
//! configuration and the seed of that run. Tasks share the problem
//! read-only and own their generator, so they are independent: with the
//! `parallel` feature they run on the rayon thread pool, otherwise
//! sequentially. Results always come back in task order, and a run that
//! panics yields a [`RunError`] without affecting the others.
//!
//! [`BudgetPlan`] derives per-strategy parameters that spend roughly the
//! same number of objective evaluations, for fair comparisons.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::greedy::GreedyRunner;
use crate::hill::{HillConfig, HillRunner};
use crate::ls::{LsConfig, LsRunner};
use crate::model::TeamProblem;
use crate::random_search::{RandomConfig, RandomRunner};
use crate::result::{Method, SolveResult};
use crate::tabu::{TabuConfig, TabuRunner};
use crate::vns::{VnsConfig, VnsRunner};

pub use crate::rng::derive_seeds;

/// A search strategy together with its configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    LocalSearch(LsConfig),
    HillClimbing(HillConfig),
    TabuSearch(TabuConfig),
    VariableNeighborhoodSearch(VnsConfig),
    RandomSearch(RandomConfig),
    Greedy,
}

impl Algorithm {
    /// Strategy implemented by this variant.
    pub fn method(&self) -> Method {
        match self {
            Algorithm::LocalSearch(_) => Method::LocalSearch,
            Algorithm::HillClimbing(_) => Method::HillClimbing,
            Algorithm::TabuSearch(_) => Method::TabuSearch,
            Algorithm::VariableNeighborhoodSearch(_) => Method::VariableNeighborhoodSearch,
            Algorithm::RandomSearch(_) => Method::RandomSearch,
            Algorithm::Greedy => Method::Greedy,
        }
    }

    /// Runs the strategy with `seed` overriding the configured seed.
    fn run(&self, problem: &TeamProblem, seed: u64) -> SolveResult {
        match self {
            Algorithm::LocalSearch(c) => LsRunner::run(problem, &c.clone().with_seed(seed)),
            Algorithm::HillClimbing(c) => HillRunner::run(problem, &c.clone().with_seed(seed)),
            Algorithm::TabuSearch(c) => TabuRunner::run(problem, &c.clone().with_seed(seed)),
            Algorithm::VariableNeighborhoodSearch(c) => {
                VnsRunner::run(problem, &c.clone().with_seed(seed))
            }
            Algorithm::RandomSearch(c) => RandomRunner::run(problem, &c.clone().with_seed(seed)),
            Algorithm::Greedy => GreedyRunner::run(problem),
        }
    }
}

/// One independent run of a benchmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunTask {
    pub algorithm: Algorithm,
    pub seed: u64,
    pub run_id: usize,
}

impl RunTask {
    pub fn new(algorithm: Algorithm, seed: u64, run_id: usize) -> Self {
        Self {
            algorithm,
            seed,
            run_id,
        }
    }
}

/// A run that panicked.
#[derive(Debug, Clone, PartialEq)]
pub struct RunError {
    pub run_id: usize,
    pub seed: u64,
    pub method: Method,
    /// Panic payload, when it was a string.
    pub message: String,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "run {} ({}, seed {}) failed: {}",
            self.run_id, self.method, self.seed, self.message
        )
    }
}

impl std::error::Error for RunError {}

/// Executes one task, tagging the result with its run id and seed.
///
/// A panic inside the strategy is caught and returned as [`RunError`].
pub fn run_task(problem: &TeamProblem, task: &RunTask) -> Result<SolveResult, RunError> {
    isolate(task, || task.algorithm.run(problem, task.seed))
}

fn isolate<F>(task: &RunTask, run: F) -> Result<SolveResult, RunError>
where
    F: FnOnce() -> SolveResult,
{
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(result) => Ok(result.with_run_id(task.run_id).with_seed(task.seed)),
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            let error = RunError {
                run_id: task.run_id,
                seed: task.seed,
                method: task.algorithm.method(),
                message,
            };
            tracing::warn!(
                run_id = error.run_id,
                seed = error.seed,
                method = error.method.name(),
                message = %error.message,
                "run failed"
            );
            Err(error)
        }
    }
}

/// Executes all tasks, returning results in task order.
///
/// # Examples
///
/// ```
/// use u_teamform::batch::{derive_seeds, run_tasks, BudgetPlan};
/// use u_teamform::generator::{generate_instance, GeneratorConfig};
///
/// let problem = generate_instance(&GeneratorConfig::default().with_seed(1)).unwrap();
/// let plan = BudgetPlan::from_evaluations(400, problem.n_skills());
/// let tasks = plan.tasks(&derive_seeds(42, 2));
/// let results = run_tasks(&problem, &tasks);
/// assert_eq!(results.len(), tasks.len());
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn run_tasks(problem: &TeamProblem, tasks: &[RunTask]) -> Vec<Result<SolveResult, RunError>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        tasks.par_iter().map(|task| run_task(problem, task)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        tasks.iter().map(|task| run_task(problem, task)).collect()
    }
}

/// Per-strategy parameters for an equal evaluation budget.
///
/// # Examples
///
/// ```
/// use u_teamform::batch::BudgetPlan;
///
/// let plan = BudgetPlan::from_evaluations(50_000, 3);
/// assert_eq!(plan.tabu.n_candidates, Some(20));
/// assert_eq!(plan.tabu.max_iterations, 2500);
/// assert_eq!(plan.vns.max_iterations, 1000);
/// assert_eq!(plan.hill.max_iterations, 2500);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetPlan {
    pub evaluations: usize,
    pub ls: LsConfig,
    pub hill: HillConfig,
    pub tabu: TabuConfig,
    pub vns: VnsConfig,
    pub random: RandomConfig,
}

/// Inner Local Search budget of VNS in a [`BudgetPlan`].
const VNS_LS_ITERATIONS: usize = 50;

impl BudgetPlan {
    /// Splits `evaluations` objective evaluations per run for an instance
    /// with `n_skills` skills. Every derived count is at least 1.
    pub fn from_evaluations(evaluations: usize, n_skills: usize) -> Self {
        let candidates = (2 * n_skills).max(20);
        let per = |divisor: usize| (evaluations / divisor).max(1);

        Self {
            evaluations,
            ls: LsConfig::default().with_max_iterations(per(1)),
            hill: HillConfig::default()
                .with_sample_size(candidates)
                .with_max_iterations(per(candidates)),
            tabu: TabuConfig::default()
                .with_n_candidates(candidates)
                .with_max_iterations(per(candidates)),
            vns: VnsConfig::default()
                .with_ls_max_iterations(VNS_LS_ITERATIONS)
                .with_max_iterations(per(VNS_LS_ITERATIONS)),
            random: RandomConfig::default().with_budget(per(1)),
        }
    }

    /// Strategies of one run, in benchmark order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        vec![
            Algorithm::TabuSearch(self.tabu.clone()),
            Algorithm::LocalSearch(self.ls.clone()),
            Algorithm::VariableNeighborhoodSearch(self.vns.clone()),
            Algorithm::RandomSearch(self.random.clone()),
            Algorithm::HillClimbing(self.hill.clone()),
        ]
    }

    /// One task per strategy and run; run `i` uses `seeds[i]`.
    ///
    /// The deterministic greedy baseline is not included; it needs a single
    /// run, added separately as `Algorithm::Greedy`.
    pub fn tasks(&self, seeds: &[u64]) -> Vec<RunTask> {
        seeds
            .iter()
            .enumerate()
            .flat_map(|(run_id, &seed)| {
                self.algorithms()
                    .into_iter()
                    .map(move |algorithm| RunTask::new(algorithm, seed, run_id))
            })
            .collect()
    }
}

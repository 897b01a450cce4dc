//! Run results handed to downstream consumers.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::model::{Genes, TeamProblem};

/// Search strategy that produced a [`SolveResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    LocalSearch,
    HillClimbing,
    TabuSearch,
    VariableNeighborhoodSearch,
    RandomSearch,
    Greedy,
    /// Tag for results produced by an external evolutionary driver built
    /// on the [`ga`](crate::ga) operators; no runner in this crate emits it.
    GeneticAlgorithm,
}

impl Method {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Method::LocalSearch => "Local Search",
            Method::HillClimbing => "Hill Climbing",
            Method::TabuSearch => "Tabu Search",
            Method::VariableNeighborhoodSearch => "Variable Neighborhood Search",
            Method::RandomSearch => "Random Search",
            Method::Greedy => "Greedy",
            Method::GeneticAlgorithm => "Genetic Algorithm",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Final solution of one search run together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Final gene vector.
    pub genes: Genes,
    /// Global efficiency of `genes`.
    pub efficiency: f64,
    pub feasible: bool,
    /// Largest constraint value, 0 when feasible.
    pub max_violation: f64,
    /// Full constraint vector (H + K·P entries).
    pub constraints: Vec<f64>,
    pub project_efficiencies: Vec<f64>,
    pub method: Method,
    /// Efficiency per outer iteration; empty for single-shot methods.
    pub history: Vec<f64>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
    /// Outer iterations executed.
    pub iterations: usize,
    /// Whether the run stopped on an external cancellation request.
    pub cancelled: bool,
    pub run_id: Option<usize>,
    /// Seed the run's generator was created from (`None` for deterministic methods).
    pub seed: Option<u64>,
    /// Method-specific scalars, e.g. the final VNS neighborhood size.
    pub extra: BTreeMap<String, f64>,
}

impl SolveResult {
    /// Evaluates `genes` and packages them with the run's metadata.
    pub fn from_genes(
        problem: &TeamProblem,
        genes: Genes,
        method: Method,
        history: Vec<f64>,
        duration: Duration,
    ) -> Self {
        let d = problem.diagnostics(&genes);
        Self {
            genes,
            efficiency: d.efficiency,
            feasible: d.feasible,
            max_violation: d.max_violation,
            constraints: d.constraints,
            project_efficiencies: d.project_efficiencies,
            method,
            history,
            duration,
            iterations: 0,
            cancelled: false,
            run_id: None,
            seed: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_run_id(mut self, run_id: usize) -> Self {
        self.run_id = Some(run_id);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Records a method-specific scalar under `key`.
    pub fn with_extra(mut self, key: impl Into<String>, value: f64) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Emits the run summary at info level.
    pub(crate) fn log_summary(&self) {
        tracing::info!(
            method = self.method.name(),
            efficiency = self.efficiency,
            feasible = self.feasible,
            iterations = self.iterations,
            elapsed_ms = self.duration.as_millis() as u64,
            "search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> TeamProblem {
        TeamProblem::builder(2, 1, 1)
            .affinity(vec![vec![1.0, 1.0], vec![1.0, 1.0]])
            .requirements(vec![vec![2.0]])
            .skill_of_person(vec![0, 0])
            .build()
            .unwrap()
    }

    #[test]
    fn test_from_genes_fills_diagnostics() {
        let p = problem();
        let r = SolveResult::from_genes(
            &p,
            vec![4, 4],
            Method::Greedy,
            vec![],
            Duration::from_millis(3),
        )
        .with_run_id(7)
        .with_seed(99)
        .with_extra("final_k", 2.0);

        assert!(r.feasible);
        assert!((r.efficiency - 1.0).abs() < 1e-12);
        assert_eq!(r.max_violation, 0.0);
        assert_eq!(r.constraints.len(), p.n_constraints());
        assert_eq!(r.project_efficiencies.len(), 1);
        assert_eq!(r.run_id, Some(7));
        assert_eq!(r.seed, Some(99));
        assert_eq!(r.extra.get("final_k"), Some(&2.0));
    }

    #[test]
    fn test_external_ga_result_tag() {
        let p = problem();
        let r = SolveResult::from_genes(
            &p,
            vec![4, 4],
            Method::GeneticAlgorithm,
            vec![0.9, 1.0],
            Duration::from_millis(1),
        );
        assert_eq!(r.method.to_string(), "Genetic Algorithm");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::TabuSearch.to_string(), "Tabu Search");
        assert_eq!(
            Method::VariableNeighborhoodSearch.name(),
            "Variable Neighborhood Search"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let p = problem();
        let r = SolveResult::from_genes(
            &p,
            vec![4, 0],
            Method::LocalSearch,
            vec![0.5, 0.6],
            Duration::from_millis(12),
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: SolveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

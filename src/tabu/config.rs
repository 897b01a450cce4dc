//! Tabu Search configuration.

use crate::clamp::positive_budget;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_teamform::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(300)
///     .with_tabu_size(2)
///     .with_n_candidates(10);
/// assert_eq!(config.effective_tabu_size(5), 2);
/// assert_eq!(config.effective_n_candidates(5), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Number of skills held in tabu memory. Defaults to `max(1, K/2)`.
    pub tabu_size: Option<usize>,
    /// Candidate skills drawn per iteration. Defaults to `max(20, 2K)`.
    pub n_candidates: Option<usize>,
    /// Iterations between restarts from a fresh constructive solution.
    pub restart_interval: usize,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_size: None,
            n_candidates: None,
            restart_interval: 200,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory size.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = Some(size);
        self
    }

    /// Sets the number of candidates drawn per iteration.
    pub fn with_n_candidates(mut self, n: usize) -> Self {
        self.n_candidates = Some(n);
        self
    }

    /// Sets the restart interval.
    pub fn with_restart_interval(mut self, n: usize) -> Self {
        self.restart_interval = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn effective_max_iterations(&self) -> usize {
        positive_budget("tabu.max_iterations", self.max_iterations)
    }

    pub fn effective_restart_interval(&self) -> usize {
        positive_budget("tabu.restart_interval", self.restart_interval)
    }

    /// Tabu memory size for an instance with `n_skills` skills.
    ///
    /// A size of `K` or more would forbid every skill, so it is clamped to
    /// `max(1, K - 1)`.
    pub fn effective_tabu_size(&self, n_skills: usize) -> usize {
        let requested = self.tabu_size.unwrap_or((n_skills / 2).max(1));
        if requested >= n_skills {
            let clamped = n_skills.saturating_sub(1).max(1);
            if clamped != requested {
                tracing::warn!(
                    requested,
                    clamped,
                    n_skills,
                    "tabu size must be below the number of skills"
                );
            }
            clamped
        } else {
            requested.max(1)
        }
    }

    /// Candidates drawn per iteration for an instance with `n_skills` skills.
    pub fn effective_n_candidates(&self, n_skills: usize) -> usize {
        match self.n_candidates {
            Some(n) => positive_budget("tabu.n_candidates", n),
            None => (2 * n_skills).max(20),
        }
    }
}

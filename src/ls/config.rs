//! Local Search configuration.

use crate::clamp::positive_budget;

/// Configuration parameters for Local Search.
///
/// # Examples
///
/// ```
/// use u_teamform::ls::LsConfig;
///
/// let config = LsConfig::default()
///     .with_max_iterations(2000)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 2000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LsConfig {
    /// Number of neighbors drawn. The search always spends the full budget.
    pub max_iterations: usize,
    /// Whether to record the best efficiency after every iteration.
    pub record_history: bool,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for LsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            record_history: true,
            seed: None,
        }
    }
}

impl LsConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables or disables history recording.
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Iteration budget, at least 1.
    pub fn effective_max_iterations(&self) -> usize {
        positive_budget("ls.max_iterations", self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ls_config_defaults() {
        let config = LsConfig::default();
        assert_eq!(config.max_iterations, 5000);
        assert!(config.record_history);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_ls_zero_budget_clamped() {
        let config = LsConfig::default().with_max_iterations(0);
        assert_eq!(config.effective_max_iterations(), 1);
    }
}

//! Random Search configuration.

use crate::clamp::positive_budget;

/// Configuration parameters for Random Search.
///
/// # Examples
///
/// ```
/// use u_teamform::random_search::RandomConfig;
///
/// let config = RandomConfig::default().with_budget(1000).with_seed(3);
/// assert_eq!(config.budget, 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Number of constructive draws (objective evaluations).
    pub budget: usize,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            budget: 50_000,
            seed: None,
        }
    }
}

impl RandomConfig {
    /// Sets the number of draws.
    pub fn with_budget(mut self, n: usize) -> Self {
        self.budget = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn effective_budget(&self) -> usize {
        positive_budget("random.budget", self.budget)
    }
}

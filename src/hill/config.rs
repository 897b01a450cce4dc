//! Hill Climbing configuration.

use crate::clamp::positive_budget;

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_teamform::hill::HillConfig;
///
/// let config = HillConfig::default()
///     .with_max_iterations(100)
///     .with_sample_size(10);
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.sample_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Maximum number of outer iterations.
    pub max_iterations: usize,
    /// Neighbors sampled per outer iteration before giving up.
    pub sample_size: usize,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            sample_size: 20,
            seed: None,
        }
    }
}

impl HillConfig {
    /// Sets the maximum number of outer iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of samples per outer iteration.
    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn effective_max_iterations(&self) -> usize {
        positive_budget("hill.max_iterations", self.max_iterations)
    }

    pub fn effective_sample_size(&self) -> usize {
        positive_budget("hill.sample_size", self.sample_size)
    }
}

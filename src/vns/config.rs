//! Variable Neighborhood Search configuration.

use std::time::Duration;

use crate::clamp::positive_budget;

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use u_teamform::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_max_iterations(200)
///     .with_ls_max_iterations(30)
///     .with_time_limit_ms(500);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.ls_max_iterations, 30);
/// assert_eq!(config.time_limit_ms, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Maximum number of shake/improve iterations.
    pub max_iterations: usize,
    /// Local Search budget after each shake.
    pub ls_max_iterations: usize,
    /// Wall-clock limit in milliseconds (None for no limit).
    pub time_limit_ms: Option<u64>,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            ls_max_iterations: 50,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inner Local Search budget.
    pub fn with_ls_max_iterations(mut self, n: usize) -> Self {
        self.ls_max_iterations = n;
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn effective_max_iterations(&self) -> usize {
        positive_budget("vns.max_iterations", self.max_iterations)
    }

    pub fn effective_ls_max_iterations(&self) -> usize {
        positive_budget("vns.ls_max_iterations", self.ls_max_iterations)
    }

    pub(crate) fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vns_config_defaults() {
        let config = VnsConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.ls_max_iterations, 50);
        assert!(config.time_limit_ms.is_none());
        assert!(config.time_limit().is_none());
    }

    #[test]
    fn test_vns_clamping() {
        let config = VnsConfig::default()
            .with_max_iterations(0)
            .with_ls_max_iterations(0);
        assert_eq!(config.effective_max_iterations(), 1);
        assert_eq!(config.effective_ls_max_iterations(), 1);
    }
}

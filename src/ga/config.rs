//! Genetic operator configuration.

/// Probabilities used by [`block_crossover`](super::block_crossover) and
/// [`block_mutation`](super::block_mutation).
///
/// # Examples
///
/// ```
/// use u_teamform::ga::GaOperatorConfig;
///
/// let config = GaOperatorConfig::default().with_mutation_prob(1.5);
/// assert_eq!(config.crossover_prob, 0.9);
/// assert_eq!(config.mutation_prob, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaOperatorConfig {
    /// Probability that a parent pair is recombined.
    pub crossover_prob: f64,
    /// Probability that an individual is mutated.
    pub mutation_prob: f64,
}

impl Default for GaOperatorConfig {
    fn default() -> Self {
        Self {
            crossover_prob: 0.9,
            mutation_prob: 0.2,
        }
    }
}

impl GaOperatorConfig {
    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_prob(mut self, p: f64) -> Self {
        self.crossover_prob = clamp_probability("ga.crossover_prob", p);
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_prob(mut self, p: f64) -> Self {
        self.mutation_prob = clamp_probability("ga.mutation_prob", p);
        self
    }
}

/// Clamps `p` into `[0, 1]`, mapping NaN to 0, with a warning on any change.
pub(crate) fn clamp_probability(parameter: &'static str, p: f64) -> f64 {
    if p.is_nan() {
        tracing::warn!(parameter, "NaN probability replaced by 0");
        return 0.0;
    }
    let clamped = p.clamp(0.0, 1.0);
    if clamped != p {
        tracing::warn!(parameter, requested = p, clamped, "probability clamped");
    }
    clamped
}

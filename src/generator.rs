//! Synthetic instance generator.
//!
//! Produces random but well-formed instances for tests, benchmarks and
//! experiments. The instances are not meant to model real organizations.

use rand::Rng;

use crate::model::{InstanceError, TeamProblem};
use crate::rng::{create_rng, resolve_seed};

/// Parameters of [`generate_instance`].
///
/// # Examples
///
/// ```
/// use u_teamform::generator::{generate_instance, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_n_people(30).with_seed(3);
/// let problem = generate_instance(&config).unwrap();
/// assert_eq!(problem.n_people(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub n_people: usize,
    pub n_projects: usize,
    pub n_skills: usize,
    /// Probability that a pair of persons likes each other. Pairs dislike
    /// each other with probability `0.5 - positive_ratio` and are neutral
    /// otherwise.
    pub positive_ratio: f64,
    /// Random seed (None draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_people: 20,
            n_projects: 3,
            n_skills: 2,
            positive_ratio: 0.3,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_n_people(mut self, n: usize) -> Self {
        self.n_people = n;
        self
    }

    pub fn with_n_projects(mut self, n: usize) -> Self {
        self.n_projects = n;
        self
    }

    pub fn with_n_skills(mut self, n: usize) -> Self {
        self.n_skills = n;
        self
    }

    /// Sets the positive-affinity ratio, clamped to `[0, 1]`.
    pub fn with_positive_ratio(mut self, ratio: f64) -> Self {
        self.positive_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Most person-time a non-final project may request from one skill.
const MAX_REQUEST_PER_PROJECT: usize = 3;

/// Share of a skill's headcount that requirements may consume in total.
const MAX_SKILL_UTILIZATION: f64 = 0.8;

/// Generates a random instance.
///
/// - Skills are drawn uniformly per person.
/// - Affinity is symmetric with a unit diagonal.
/// - Each skill needs 50-70% of its headcount, spread over the projects
///   (at most 3 per project before the last), then scaled down so no skill
///   needs more than 80% of its headcount.
///
/// Fails only when a dimension is zero.
pub fn generate_instance(config: &GeneratorConfig) -> Result<TeamProblem, InstanceError> {
    let (h, p, k) = (config.n_people, config.n_projects, config.n_skills);
    let mut rng = create_rng(resolve_seed(config.seed));

    let skill_of_person: Vec<usize> = (0..h)
        .map(|_| if k == 0 { 0 } else { rng.random_range(0..k) })
        .collect();
    let mut skill_counts = vec![0usize; k];
    for &s in &skill_of_person {
        if s < k {
            skill_counts[s] += 1;
        }
    }

    let mut affinity = vec![vec![0.0; h]; h];
    for i in 0..h {
        affinity[i][i] = 1.0;
        for j in (i + 1)..h {
            let draw: f64 = rng.random();
            let value = if draw < config.positive_ratio {
                1.0
            } else if draw < 0.5 {
                -1.0
            } else {
                0.0
            };
            affinity[i][j] = value;
            affinity[j][i] = value;
        }
    }

    let mut requirements = vec![vec![0.0; p]; k];
    for (skill, row) in requirements.iter_mut().enumerate() {
        let available = skill_counts[skill];
        let share: f64 = rng.random_range(0.5..0.7);
        let mut remaining = ((available as f64 * share) as usize).max(1);

        for (project, cell) in row.iter_mut().enumerate() {
            if project + 1 < p {
                let request = rng.random_range(0..=MAX_REQUEST_PER_PROJECT.min(remaining));
                *cell = request as f64;
                remaining -= request;
            } else {
                *cell = remaining as f64;
            }
        }

        let cap = available as f64 * MAX_SKILL_UTILIZATION;
        let total: f64 = row.iter().sum();
        if total > cap {
            let scale = cap / total;
            for cell in row.iter_mut() {
                *cell = (*cell * scale).round();
            }
        }
    }

    TeamProblem::builder(h, p, k)
        .affinity(affinity)
        .requirements(requirements)
        .skill_of_person(skill_of_person)
        .build()
}

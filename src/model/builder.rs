//! Validated construction of [`TeamProblem`] instances.

use super::err::{InstanceError, InstanceField};
use super::problem::TeamProblem;

/// Dedication levels used when none are supplied.
pub const DEFAULT_LEVELS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Builder for [`TeamProblem`].
///
/// The dimensions are declared up front; every matrix and vector supplied
/// afterwards is checked against them in [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use u_teamform::model::InstanceBuilder;
///
/// let problem = InstanceBuilder::new(2, 1, 1)
///     .affinity(vec![vec![1.0, 1.0], vec![1.0, 1.0]])
///     .requirements(vec![vec![1.0]])
///     .skill_of_person(vec![0, 0])
///     .build()
///     .unwrap();
/// assert_eq!(problem.n_genes(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    n_people: usize,
    n_projects: usize,
    n_skills: usize,
    affinity: Option<Vec<Vec<f64>>>,
    requirements: Option<Vec<Vec<f64>>>,
    skill_of_person: Option<Vec<usize>>,
    project_weights: Option<Vec<f64>>,
    dedication_levels: Option<Vec<f64>>,
}

impl InstanceBuilder {
    /// Starts a builder for H persons, P projects and K skills.
    pub fn new(n_people: usize, n_projects: usize, n_skills: usize) -> Self {
        Self {
            n_people,
            n_projects,
            n_skills,
            affinity: None,
            requirements: None,
            skill_of_person: None,
            project_weights: None,
            dedication_levels: None,
        }
    }

    /// Sets the H×H sociometric matrix, one row per person.
    pub fn affinity(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.affinity = Some(rows);
        self
    }

    /// Sets the K×P requirement matrix, one row per skill.
    pub fn requirements(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.requirements = Some(rows);
        self
    }

    /// Sets the skill index of every person.
    pub fn skill_of_person(mut self, skills: Vec<usize>) -> Self {
        self.skill_of_person = Some(skills);
        self
    }

    /// Sets project weights. They are renormalized to sum to 1.
    ///
    /// Defaults to equal weights.
    pub fn project_weights(mut self, weights: Vec<f64>) -> Self {
        self.project_weights = Some(weights);
        self
    }

    /// Sets the allowed dedication levels.
    ///
    /// Defaults to [`DEFAULT_LEVELS`].
    pub fn dedication_levels(mut self, levels: Vec<f64>) -> Self {
        self.dedication_levels = Some(levels);
        self
    }

    /// Validates all inputs and builds the instance.
    pub fn build(self) -> Result<TeamProblem, InstanceError> {
        let (h, p, k) = (self.n_people, self.n_projects, self.n_skills);
        for (name, value) in [("n_people", h), ("n_projects", p), ("n_skills", k)] {
            if value == 0 {
                return Err(InstanceError::ZeroDimension { name });
            }
        }

        let affinity = self
            .affinity
            .ok_or(InstanceError::Missing(InstanceField::Affinity))?;
        let affinity = flatten_matrix(InstanceField::Affinity, affinity, h, h)?;

        let requirements = self
            .requirements
            .ok_or(InstanceError::Missing(InstanceField::Requirements))?;
        let requirements = flatten_matrix(InstanceField::Requirements, requirements, k, p)?;
        check_nonnegative(InstanceField::Requirements, &requirements)?;

        let skill_of_person = self
            .skill_of_person
            .ok_or(InstanceError::Missing(InstanceField::SkillOfPerson))?;
        if skill_of_person.len() != h {
            return Err(InstanceError::ShapeMismatch {
                field: InstanceField::SkillOfPerson,
                expected: h.to_string(),
                found: skill_of_person.len().to_string(),
            });
        }
        if let Some((person, &skill)) = skill_of_person
            .iter()
            .enumerate()
            .find(|&(_, &s)| s >= k)
        {
            return Err(InstanceError::SkillOutOfRange {
                person,
                skill,
                n_skills: k,
            });
        }

        let weights = match self.project_weights {
            Some(w) => normalize_weights(w, p)?,
            None => vec![1.0 / p as f64; p],
        };

        let levels = match self.dedication_levels {
            Some(levels) => validate_levels(levels)?,
            None => DEFAULT_LEVELS.to_vec(),
        };

        Ok(TeamProblem::from_validated(
            h,
            p,
            k,
            affinity,
            requirements,
            skill_of_person,
            weights,
            levels,
        ))
    }
}

/// Checks that `rows` is exactly `n_rows × n_cols` and finite, then flattens it.
fn flatten_matrix(
    field: InstanceField,
    rows: Vec<Vec<f64>>,
    n_rows: usize,
    n_cols: usize,
) -> Result<Vec<f64>, InstanceError> {
    let mismatch = |found: String| InstanceError::ShapeMismatch {
        field,
        expected: format!("{n_rows}x{n_cols}"),
        found,
    };
    if rows.len() != n_rows {
        let cols = rows.first().map_or(0, Vec::len);
        return Err(mismatch(format!("{}x{}", rows.len(), cols)));
    }
    if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
        return Err(mismatch(format!("{}x{} (ragged)", rows.len(), bad.len())));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    if let Some(index) = flat.iter().position(|v| !v.is_finite()) {
        return Err(InstanceError::NonFinite { field, index });
    }
    Ok(flat)
}

fn check_nonnegative(field: InstanceField, values: &[f64]) -> Result<(), InstanceError> {
    match values.iter().position(|&v| v < 0.0) {
        Some(index) => Err(InstanceError::Negative {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn normalize_weights(weights: Vec<f64>, n_projects: usize) -> Result<Vec<f64>, InstanceError> {
    let field = InstanceField::ProjectWeights;
    if weights.len() != n_projects {
        return Err(InstanceError::ShapeMismatch {
            field,
            expected: n_projects.to_string(),
            found: weights.len().to_string(),
        });
    }
    if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
        return Err(InstanceError::NonFinite { field, index });
    }
    check_nonnegative(field, &weights)?;
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(InstanceError::ZeroWeightSum);
    }
    Ok(weights.into_iter().map(|w| w / sum).collect())
}

fn validate_levels(levels: Vec<f64>) -> Result<Vec<f64>, InstanceError> {
    let field = InstanceField::DedicationLevels;
    let Some(&first) = levels.first() else {
        return Err(InstanceError::ShapeMismatch {
            field,
            expected: "at least 1 level".into(),
            found: "0".into(),
        });
    };
    if let Some(index) = levels.iter().position(|l| !l.is_finite()) {
        return Err(InstanceError::NonFinite { field, index });
    }
    if first != 0.0 {
        return Err(InstanceError::LevelsNotStartingAtZero { first });
    }
    if let Some(w) = levels.windows(2).position(|w| w[1] <= w[0]) {
        return Err(InstanceError::LevelsNotAscending { index: w + 1 });
    }
    Ok(levels)
}

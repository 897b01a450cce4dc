//! Instance construction errors.

/// Which input matrix or vector an [`InstanceError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceField {
    Affinity,
    Requirements,
    SkillOfPerson,
    ProjectWeights,
    DedicationLevels,
}

impl std::fmt::Display for InstanceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InstanceField::Affinity => "affinity matrix",
            InstanceField::Requirements => "requirement matrix",
            InstanceField::SkillOfPerson => "skill-of-person vector",
            InstanceField::ProjectWeights => "project weights",
            InstanceField::DedicationLevels => "dedication levels",
        };
        f.write_str(name)
    }
}

/// Malformed instance data detected by [`InstanceBuilder::build`](super::InstanceBuilder::build).
///
/// Construction never reshapes or repairs its input; every mismatch between
/// the declared dimensions and the supplied data is reported here.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    /// One of H, P or K is zero.
    ZeroDimension { name: &'static str },
    /// A required input was never supplied.
    Missing(InstanceField),
    /// A matrix or vector does not have the expected shape.
    ShapeMismatch {
        field: InstanceField,
        expected: String,
        found: String,
    },
    /// A value is NaN or infinite.
    NonFinite {
        field: InstanceField,
        index: usize,
    },
    /// A value that must be nonnegative is negative.
    Negative {
        field: InstanceField,
        index: usize,
        value: f64,
    },
    /// A person is assigned a skill index outside `0..K`.
    SkillOutOfRange {
        person: usize,
        skill: usize,
        n_skills: usize,
    },
    /// Project weights sum to zero and cannot be normalized.
    ZeroWeightSum,
    /// Dedication levels do not start at zero.
    LevelsNotStartingAtZero { first: f64 },
    /// Dedication levels are not strictly ascending.
    LevelsNotAscending { index: usize },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::ZeroDimension { name } => {
                write!(f, "dimension {name} must be positive")
            }
            InstanceError::Missing(field) => write!(f, "{field} was not supplied"),
            InstanceError::ShapeMismatch {
                field,
                expected,
                found,
            } => write!(f, "{field} has shape {found}, expected {expected}"),
            InstanceError::NonFinite { field, index } => {
                write!(f, "{field} contains a non-finite value at index {index}")
            }
            InstanceError::Negative {
                field,
                index,
                value,
            } => write!(f, "{field} contains negative value {value} at index {index}"),
            InstanceError::SkillOutOfRange {
                person,
                skill,
                n_skills,
            } => write!(
                f,
                "person {person} has skill {skill}, but only {n_skills} skills exist"
            ),
            InstanceError::ZeroWeightSum => {
                write!(f, "project weights sum to zero and cannot be normalized")
            }
            InstanceError::LevelsNotStartingAtZero { first } => {
                write!(f, "dedication levels must start at 0, found {first}")
            }
            InstanceError::LevelsNotAscending { index } => write!(
                f,
                "dedication levels must be strictly ascending (violated at index {index})"
            ),
        }
    }
}

impl std::error::Error for InstanceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_field_and_shape() {
        let err = InstanceError::ShapeMismatch {
            field: InstanceField::Affinity,
            expected: "3x3".into(),
            found: "3x2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("affinity matrix"), "{msg}");
        assert!(msg.contains("3x2"), "{msg}");
        assert!(msg.contains("3x3"), "{msg}");
    }

    #[test]
    fn test_skill_out_of_range_message() {
        let err = InstanceError::SkillOutOfRange {
            person: 4,
            skill: 7,
            n_skills: 2,
        };
        assert_eq!(
            err.to_string(),
            "person 4 has skill 7, but only 2 skills exist"
        );
    }
}

//! Defensive clamping of tuning parameters.
//!
//! Invalid budgets are replaced by a safe fallback and logged, never rejected.

/// Returns `value`, or 1 with a warning when it is zero.
pub(crate) fn positive_budget(parameter: &'static str, value: usize) -> usize {
    if value == 0 {
        tracing::warn!(parameter, "non-positive budget clamped to 1");
        1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_budget() {
        assert_eq!(positive_budget("max_iterations", 0), 1);
        assert_eq!(positive_budget("max_iterations", 25), 25);
    }
}

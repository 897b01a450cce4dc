//! Objective and constraint evaluation.
//!
//! # Objective
//!
//! Project efficiency `e_l = 0.5 * (1 + x_lᵀ S x_l / T_l²)` where `x_l` is
//! the allocation column of project `l` and `T_l` its total requirement.
//! Global efficiency is the weighted sum `Σ_l w_l e_l`. Solvers maximize
//! efficiency; [`Evaluation::objective`] carries its negation for engines
//! that minimize.
//!
//! # Constraints
//!
//! A constraint vector has `H + K·P` entries, each feasible iff `<= 0`:
//!
//! - capacity: `Σ_l a[i,l] - 1` per person,
//! - requirement: `|Σ_{i∈k} a[i,l] - R[k,l]| - ε` per (skill, project), in
//!   skill-major order.
//!
//! # Reference
//!
//! Gutiérrez, J.H., Astudillo, C.A., Ballesteros-Pérez, P., Mora-Melià, D.,
//! Candia-Véjar, A. (2016). "The multiple team formation problem using
//! sociometry", *Computers & Operations Research* 75, 150-162.

use super::allocation::Allocation;
use super::problem::TeamProblem;

/// Default tolerance on skill requirements.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Squared total requirement below which a project's efficiency is fixed.
const DENOMINATOR_FLOOR: f64 = 1e-12;

/// Efficiency of a project whose total requirement is (near) zero.
const NEUTRAL_EFFICIENCY: f64 = 0.5;

/// Objective value and constraint vector of one gene vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Negated global efficiency (lower is better).
    pub objective: f64,
    /// Constraint values, feasible iff every entry is `<= 0`.
    pub constraints: Vec<f64>,
}

impl Evaluation {
    /// Global efficiency (the objective with its sign restored).
    pub fn efficiency(&self) -> f64 {
        -self.objective
    }
}

/// Full breakdown of a solution, as reported with run results.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub efficiency: f64,
    pub feasible: bool,
    /// Efficiency `e_l` of every project.
    pub project_efficiencies: Vec<f64>,
    /// Constraint vector at [`DEFAULT_EPSILON`].
    pub constraints: Vec<f64>,
    /// Largest constraint value, or 0 when feasible.
    pub max_violation: f64,
    /// Total dedication per person.
    pub person_totals: Vec<f64>,
    /// Total dedication per project.
    pub project_totals: Vec<f64>,
    /// Total requirement per project.
    pub requirements_per_project: Vec<f64>,
}

impl TeamProblem {
    /// Evaluates objective and constraints at [`DEFAULT_EPSILON`].
    pub fn evaluate(&self, genes: &[usize]) -> Evaluation {
        let allocation = self.decode(genes);
        Evaluation {
            objective: -self.global_efficiency(&allocation),
            constraints: self.constraints_with_epsilon(&allocation, DEFAULT_EPSILON),
        }
    }

    /// Global efficiency of a gene vector, skipping constraint evaluation.
    pub fn efficiency(&self, genes: &[usize]) -> f64 {
        self.global_efficiency(&self.decode(genes))
    }

    /// `Σ_l w_l e_l` for an allocation.
    pub fn global_efficiency(&self, allocation: &Allocation) -> f64 {
        (0..self.n_projects())
            .map(|l| self.weights()[l] * self.project_efficiency(allocation, l))
            .sum()
    }

    /// Efficiency `e_l` of one project.
    ///
    /// Falls back to 0.5 when the project's squared total requirement is
    /// below `1e-12`.
    pub fn project_efficiency(&self, allocation: &Allocation, project: usize) -> f64 {
        let denominator = self.total_requirement(project).powi(2);
        if denominator.abs() < DENOMINATOR_FLOOR {
            return NEUTRAL_EFFICIENCY;
        }

        // Only assigned persons contribute to the quadratic form.
        let assigned: Vec<(usize, f64)> = (0..self.n_people())
            .map(|i| (i, allocation.get(i, project)))
            .filter(|&(_, x)| x != 0.0)
            .collect();

        let mut quadratic = 0.0;
        for &(i, xi) in &assigned {
            for &(j, xj) in &assigned {
                quadratic += xi * self.affinity(i, j) * xj;
            }
        }

        NEUTRAL_EFFICIENCY * (1.0 + quadratic / denominator)
    }

    /// Constraint vector with requirement tolerance `epsilon`.
    pub fn constraints_with_epsilon(&self, allocation: &Allocation, epsilon: f64) -> Vec<f64> {
        let mut g = Vec::with_capacity(self.n_constraints());

        for i in 0..self.n_people() {
            g.push(allocation.person_total(i) - 1.0);
        }

        for k in 0..self.n_skills() {
            let group = self.skill_group(k);
            for l in 0..self.n_projects() {
                let delivered: f64 = group.iter().map(|&i| allocation.get(i, l)).sum();
                g.push((delivered - self.requirement(k, l)).abs() - epsilon);
            }
        }

        g
    }

    /// Returns `true` if capacity holds and every requirement is met within `tol`.
    pub fn is_feasible(&self, genes: &[usize], tol: f64) -> bool {
        let allocation = self.decode(genes);
        self.constraints_with_epsilon(&allocation, tol)
            .iter()
            .all(|&g| g <= 0.0)
    }

    /// Complete diagnostic breakdown of a gene vector.
    pub fn diagnostics(&self, genes: &[usize]) -> Diagnostics {
        let allocation = self.decode(genes);
        let project_efficiencies: Vec<f64> = (0..self.n_projects())
            .map(|l| self.project_efficiency(&allocation, l))
            .collect();
        let efficiency = project_efficiencies
            .iter()
            .zip(self.weights())
            .map(|(e, w)| e * w)
            .sum();
        let constraints = self.constraints_with_epsilon(&allocation, DEFAULT_EPSILON);
        let feasible = constraints.iter().all(|&g| g <= 0.0);
        let max_violation = if feasible {
            0.0
        } else {
            constraints.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        };

        Diagnostics {
            efficiency,
            feasible,
            project_efficiencies,
            constraints,
            max_violation,
            person_totals: allocation.person_totals(),
            project_totals: allocation.project_totals(),
            requirements_per_project: self.total_requirements().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario A instance: four persons of one skill, one project needing 2.0.
    fn pair_affinity() -> TeamProblem {
        let mut s = vec![vec![0.0; 4]; 4];
        for (i, row) in s.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        s[0][1] = 1.0;
        s[1][0] = 1.0;
        TeamProblem::builder(4, 1, 1)
            .affinity(s)
            .requirements(vec![vec![2.0]])
            .skill_of_person(vec![0; 4])
            .build()
            .unwrap()
    }

    #[test]
    fn test_project_efficiency_formula() {
        let p = pair_affinity();
        // Persons 0 and 1 fully on the project: xᵀSx = 1 + 1 + 1 + 1 = 4.
        let genes = vec![4, 4, 0, 0];
        let e = p.efficiency(&genes);
        assert!((e - 0.5 * (1.0 + 4.0 / 4.0)).abs() < 1e-12, "got {e}");

        // Persons 2 and 3 are strangers: xᵀSx = 2.
        let genes = vec![0, 0, 4, 4];
        let e = p.efficiency(&genes);
        assert!((e - 0.75).abs() < 1e-12, "got {e}");
    }

    #[test]
    fn test_evaluate_objective_is_negated() {
        let p = pair_affinity();
        let genes = vec![4, 4, 0, 0];
        let ev = p.evaluate(&genes);
        assert!((ev.objective + 1.0).abs() < 1e-12);
        assert!((ev.efficiency() - 1.0).abs() < 1e-12);
        assert_eq!(ev.constraints.len(), p.n_constraints());
    }

    #[test]
    fn test_constraint_layout() {
        let p = pair_affinity();
        let genes = vec![4, 2, 0, 0];
        let ev = p.evaluate(&genes);
        // Capacity entries.
        assert!((ev.constraints[0] - 0.0).abs() < 1e-12);
        assert!((ev.constraints[1] + 0.5).abs() < 1e-12);
        assert!((ev.constraints[2] + 1.0).abs() < 1e-12);
        // Requirement entry: |1.5 - 2.0| - 1e-4.
        assert!((ev.constraints[4] - (0.5 - DEFAULT_EPSILON)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_requirements_yield_neutral_efficiency() {
        let p = TeamProblem::builder(2, 2, 1)
            .affinity(vec![vec![1.0, -1.0], vec![-1.0, 1.0]])
            .requirements(vec![vec![0.0, 0.0]])
            .skill_of_person(vec![0, 0])
            .build()
            .unwrap();
        for genes in [vec![0, 0, 0, 0], vec![4, 0, 0, 4], vec![2, 2, 3, 1]] {
            let d = p.diagnostics(&genes);
            assert!(d.project_efficiencies.iter().all(|&e| e == 0.5));
            assert!((d.efficiency - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_diagnostics_feasible_solution() {
        let p = pair_affinity();
        let d = p.diagnostics(&[4, 4, 0, 0]);
        assert!(d.feasible);
        assert_eq!(d.max_violation, 0.0);
        assert_eq!(d.person_totals, vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(d.project_totals, vec![2.0]);
        assert_eq!(d.requirements_per_project, vec![2.0]);
        assert!((d.efficiency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_diagnostics_reports_max_violation() {
        let p = pair_affinity();
        let d = p.diagnostics(&[4, 0, 0, 0]);
        assert!(!d.feasible);
        assert!((d.max_violation - (1.0 - DEFAULT_EPSILON)).abs() < 1e-12);
    }

    #[test]
    fn test_is_feasible_uses_tolerance() {
        let p = TeamProblem::builder(1, 1, 1)
            .affinity(vec![vec![1.0]])
            .requirements(vec![vec![0.3]])
            .skill_of_person(vec![0])
            .build()
            .unwrap();
        // Delivered 0.25 against 0.3.
        assert!(!p.is_feasible(&[1], 1e-4));
        assert!(p.is_feasible(&[1], 0.1));
    }

    #[test]
    fn test_capacity_violation_is_infeasible() {
        let p = TeamProblem::builder(1, 2, 1)
            .affinity(vec![vec![1.0]])
            .requirements(vec![vec![1.0, 1.0]])
            .skill_of_person(vec![0])
            .build()
            .unwrap();
        let ev = p.evaluate(&[4, 4]);
        assert!((ev.constraints[0] - 1.0).abs() < 1e-12);
        assert!(!p.is_feasible(&[4, 4], 1e-4));
    }
}

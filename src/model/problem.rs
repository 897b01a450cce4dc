//! The immutable team formation instance and its gene encoding.

use super::allocation::Allocation;
use super::builder::InstanceBuilder;

/// A gene vector: H·P indices into the dedication levels, row-major by person.
pub type Genes = Vec<usize>;

/// A validated Multiple Team Formation Problem instance.
///
/// Owns the instance data and every derived lookup structure. It is never
/// mutated after construction, so a single instance can be shared by
/// reference across concurrent search runs.
///
/// Build one with [`InstanceBuilder`] (or [`TeamProblem::builder`]).
#[derive(Debug, Clone)]
pub struct TeamProblem {
    n_people: usize,
    n_projects: usize,
    n_skills: usize,
    /// H×H row-major.
    affinity: Vec<f64>,
    /// K×P row-major.
    requirements: Vec<f64>,
    skill_of_person: Vec<usize>,
    weights: Vec<f64>,
    levels: Vec<f64>,
    skill_groups: Vec<Vec<usize>>,
    total_requirement: Vec<f64>,
}

impl TeamProblem {
    /// Shorthand for [`InstanceBuilder::new`].
    pub fn builder(n_people: usize, n_projects: usize, n_skills: usize) -> InstanceBuilder {
        InstanceBuilder::new(n_people, n_projects, n_skills)
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_validated(
        n_people: usize,
        n_projects: usize,
        n_skills: usize,
        affinity: Vec<f64>,
        requirements: Vec<f64>,
        skill_of_person: Vec<usize>,
        weights: Vec<f64>,
        levels: Vec<f64>,
    ) -> Self {
        let mut skill_groups = vec![Vec::new(); n_skills];
        for (person, &skill) in skill_of_person.iter().enumerate() {
            skill_groups[skill].push(person);
        }

        let total_requirement = (0..n_projects)
            .map(|l| (0..n_skills).map(|k| requirements[k * n_projects + l]).sum())
            .collect();

        Self {
            n_people,
            n_projects,
            n_skills,
            affinity,
            requirements,
            skill_of_person,
            weights,
            levels,
            skill_groups,
            total_requirement,
        }
    }

    /// Number of persons (H).
    pub fn n_people(&self) -> usize {
        self.n_people
    }

    /// Number of projects (P).
    pub fn n_projects(&self) -> usize {
        self.n_projects
    }

    /// Number of skills (K).
    pub fn n_skills(&self) -> usize {
        self.n_skills
    }

    /// Length of a gene vector (H·P).
    pub fn n_genes(&self) -> usize {
        self.n_people * self.n_projects
    }

    /// Length of the constraint vector (H + K·P).
    pub fn n_constraints(&self) -> usize {
        self.n_people + self.n_skills * self.n_projects
    }

    /// Sociometric affinity between persons `i` and `j`.
    pub fn affinity(&self, i: usize, j: usize) -> f64 {
        self.affinity[i * self.n_people + j]
    }

    /// Requirement of `skill` on `project`.
    pub fn requirement(&self, skill: usize, project: usize) -> f64 {
        self.requirements[skill * self.n_projects + project]
    }

    pub fn skill_of(&self, person: usize) -> usize {
        self.skill_of_person[person]
    }

    /// Persons holding `skill`, in ascending index order.
    pub fn skill_group(&self, skill: usize) -> &[usize] {
        &self.skill_groups[skill]
    }

    pub fn skill_groups(&self) -> &[Vec<usize>] {
        &self.skill_groups
    }

    /// Sum of all skill requirements of `project`.
    pub fn total_requirement(&self, project: usize) -> f64 {
        self.total_requirement[project]
    }

    pub fn total_requirements(&self) -> &[f64] {
        &self.total_requirement
    }

    /// Normalized project weights (sum to 1).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Dedication levels, strictly ascending, starting at 0.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Smallest positive dedication level, if any.
    pub fn min_nonzero_level(&self) -> Option<f64> {
        self.levels.get(1).copied()
    }

    /// Largest level not exceeding `bound + tolerance`, or 0 when none fits.
    pub fn largest_level_within(&self, bound: f64, tolerance: f64) -> f64 {
        self.levels
            .iter()
            .rev()
            .find(|&&l| l <= bound + tolerance)
            .copied()
            .unwrap_or(0.0)
    }

    /// The all-zero gene vector (nobody assigned anywhere).
    pub fn empty_genes(&self) -> Genes {
        vec![0; self.n_genes()]
    }

    /// Flat gene positions `i * P .. (i + 1) * P` of every person with `skill`.
    pub fn skill_gene_indices(&self, skill: usize) -> impl Iterator<Item = usize> + '_ {
        let p = self.n_projects;
        self.skill_groups[skill]
            .iter()
            .flat_map(move |&person| person * p..(person + 1) * p)
    }

    /// Decodes a gene vector into an allocation matrix.
    ///
    /// Indices beyond the last level are clipped to it.
    ///
    /// # Panics
    ///
    /// Panics if `genes.len() != H·P`.
    pub fn decode(&self, genes: &[usize]) -> Allocation {
        self.assert_gene_len(genes.len());
        let last = self.levels.len() - 1;
        let data = genes.iter().map(|&g| self.levels[g.min(last)]).collect();
        Allocation::from_data(self.n_people, self.n_projects, data)
            .expect("gene length checked above")
    }

    /// Decodes real-valued level indices, as produced by engines that
    /// relax integrality.
    ///
    /// Each value is rounded to the nearest integer and clipped to
    /// `[0, |L| - 1]` before mapping through the levels.
    ///
    /// # Panics
    ///
    /// Panics if `genes.len() != H·P`.
    pub fn decode_relaxed(&self, genes: &[f64]) -> Allocation {
        self.assert_gene_len(genes.len());
        let last = (self.levels.len() - 1) as f64;
        let data = genes
            .iter()
            .map(|&g| {
                let idx = if g.is_nan() { 0.0 } else { g.round().clamp(0.0, last) };
                self.levels[idx as usize]
            })
            .collect();
        Allocation::from_data(self.n_people, self.n_projects, data)
            .expect("gene length checked above")
    }

    /// Encodes an allocation matrix as the nearest level index per cell.
    ///
    /// Ties resolve toward the lower level.
    ///
    /// # Panics
    ///
    /// Panics if the allocation is not H×P.
    pub fn encode(&self, allocation: &Allocation) -> Genes {
        assert!(
            allocation.n_people() == self.n_people && allocation.n_projects() == self.n_projects,
            "allocation is {}x{}, expected {}x{}",
            allocation.n_people(),
            allocation.n_projects(),
            self.n_people,
            self.n_projects
        );
        allocation
            .as_slice()
            .iter()
            .map(|&v| self.nearest_level_index(v))
            .collect()
    }

    /// Index of the level closest to `value`, lowest index on ties.
    pub fn nearest_level_index(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.levels[0] - value).abs();
        for (idx, &level) in self.levels.iter().enumerate().skip(1) {
            let dist = (level - value).abs();
            if dist < best_dist {
                best = idx;
                best_dist = dist;
            }
        }
        best
    }

    fn assert_gene_len(&self, len: usize) {
        assert_eq!(
            len,
            self.n_genes(),
            "gene vector has length {len}, expected H*P = {}",
            self.n_genes()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> TeamProblem {
        TeamProblem::builder(3, 2, 2)
            .affinity(vec![
                vec![1.0, 1.0, -1.0],
                vec![1.0, 1.0, 0.0],
                vec![-1.0, 0.0, 1.0],
            ])
            .requirements(vec![vec![1.0, 0.5], vec![0.0, 1.0]])
            .skill_of_person(vec![1, 0, 1])
            .build()
            .unwrap()
    }

    #[test]
    fn test_decode_maps_and_clips() {
        let p = small();
        let a = p.decode(&[0, 1, 2, 3, 4, 99]);
        assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
    }

    #[test]
    fn test_decode_relaxed_rounds() {
        let p = small();
        let a = p.decode_relaxed(&[0.4, 0.6, 2.49, -3.0, 7.2, f64::NAN]);
        assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.0, 1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "gene vector has length")]
    fn test_decode_wrong_length_panics() {
        small().decode(&[0, 1]);
    }

    #[test]
    fn test_encode_nearest_with_low_tie() {
        let p = small();
        let a = Allocation::from_data(3, 2, vec![0.125, 0.3, 0.9, 1.2, -0.5, 0.625]).unwrap();
        // 0.125 and 0.625 are exact midpoints: lower level wins.
        assert_eq!(p.encode(&a), vec![0, 1, 4, 4, 0, 2]);
    }

    #[test]
    fn test_round_trip_exact_indices() {
        let p = small();
        let genes = vec![4, 0, 3, 1, 2, 2];
        assert_eq!(p.encode(&p.decode(&genes)), genes);
    }

    #[test]
    fn test_skill_groups_and_gene_indices() {
        let p = small();
        assert_eq!(p.skill_group(0), &[1]);
        assert_eq!(p.skill_group(1), &[0, 2]);
        let idx: Vec<usize> = p.skill_gene_indices(1).collect();
        assert_eq!(idx, vec![0, 1, 4, 5]);
        assert_eq!(p.skill_of(1), 0);
    }

    #[test]
    fn test_largest_level_within() {
        let p = small();
        assert_eq!(p.largest_level_within(0.6, 1e-5), 0.5);
        assert_eq!(p.largest_level_within(0.749999, 1e-5), 0.75);
        assert_eq!(p.largest_level_within(0.749999, 1e-9), 0.5);
        assert_eq!(p.largest_level_within(3.0, 1e-9), 1.0);
        assert_eq!(p.largest_level_within(0.1, 1e-5), 0.0);
    }

    #[test]
    fn test_dimensions() {
        let p = small();
        assert_eq!(p.n_genes(), 6);
        assert_eq!(p.n_constraints(), 3 + 4);
        assert_eq!(p.min_nonzero_level(), Some(0.25));
        assert_eq!(p.empty_genes(), vec![0; 6]);
        assert!((p.affinity(0, 2) + 1.0).abs() < 1e-12);
        assert!((p.requirement(0, 1) - 0.5).abs() < 1e-12);
    }
}

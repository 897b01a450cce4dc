//! Dense person × project allocation matrix.

/// An H×P matrix of dedication values stored in row-major order.
///
/// Cell `(i, l)` holds the fraction of person `i`'s capacity spent on
/// project `l`. Allocations are produced by decoding a gene vector and
/// consumed within a single operation.
///
/// # Examples
///
/// ```
/// use u_teamform::model::Allocation;
///
/// let mut a = Allocation::zeros(2, 3);
/// a.set(1, 2, 0.5);
/// assert!((a.get(1, 2) - 0.5).abs() < 1e-12);
/// assert!((a.person_total(1) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    data: Vec<f64>,
    n_people: usize,
    n_projects: usize,
}

impl Allocation {
    /// Creates an all-zero allocation.
    pub fn zeros(n_people: usize, n_projects: usize) -> Self {
        Self {
            data: vec![0.0; n_people * n_projects],
            n_people,
            n_projects,
        }
    }

    /// Wraps row-major data.
    ///
    /// Returns `None` if `data.len() != n_people * n_projects`.
    pub fn from_data(n_people: usize, n_projects: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != n_people * n_projects {
            return None;
        }
        Some(Self {
            data,
            n_people,
            n_projects,
        })
    }

    pub fn n_people(&self) -> usize {
        self.n_people
    }

    pub fn n_projects(&self) -> usize {
        self.n_projects
    }

    /// Dedication of `person` on `project`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, person: usize, project: usize) -> f64 {
        self.data[person * self.n_projects + project]
    }

    pub fn set(&mut self, person: usize, project: usize, value: f64) {
        self.data[person * self.n_projects + project] = value;
    }

    /// All projects of one person.
    pub fn row(&self, person: usize) -> &[f64] {
        let start = person * self.n_projects;
        &self.data[start..start + self.n_projects]
    }

    /// Zeroes every cell of `person`.
    pub fn clear_person(&mut self, person: usize) {
        let start = person * self.n_projects;
        self.data[start..start + self.n_projects].fill(0.0);
    }

    /// Total dedication of one person across all projects.
    pub fn person_total(&self, person: usize) -> f64 {
        self.row(person).iter().sum()
    }

    /// Total dedication on one project across all persons.
    pub fn project_total(&self, project: usize) -> f64 {
        (0..self.n_people).map(|i| self.get(i, project)).sum()
    }

    /// Row sums, one per person.
    pub fn person_totals(&self) -> Vec<f64> {
        (0..self.n_people).map(|i| self.person_total(i)).collect()
    }

    /// Column sums, one per project.
    pub fn project_totals(&self) -> Vec<f64> {
        (0..self.n_projects).map(|l| self.project_total(l)).collect()
    }

    /// Column `project` as a vector of length H.
    pub fn column(&self, project: usize) -> Vec<f64> {
        (0..self.n_people).map(|i| self.get(i, project)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_rejects_wrong_length() {
        assert!(Allocation::from_data(2, 2, vec![0.0; 3]).is_none());
        assert!(Allocation::from_data(2, 2, vec![0.0; 4]).is_some());
    }

    #[test]
    fn test_totals() {
        let a = Allocation::from_data(2, 2, vec![0.25, 0.5, 1.0, 0.0]).unwrap();
        assert_eq!(a.person_totals(), vec![0.75, 1.0]);
        assert_eq!(a.project_totals(), vec![1.25, 0.5]);
        assert_eq!(a.column(0), vec![0.25, 1.0]);
    }

    #[test]
    fn test_clear_person() {
        let mut a = Allocation::from_data(2, 2, vec![0.25, 0.5, 1.0, 0.0]).unwrap();
        a.clear_person(0);
        assert_eq!(a.row(0), &[0.0, 0.0]);
        assert_eq!(a.row(1), &[1.0, 0.0]);
    }
}

//! Problem model for the Multiple Team Formation Problem.
//!
//! H persons, each holding exactly one of K skills, are assigned to P
//! projects at discrete dedication levels. A solution is a gene vector of
//! H·P level indices; [`TeamProblem`] decodes it into an [`Allocation`],
//! evaluates the sociometric efficiency objective, and reports capacity and
//! skill-requirement constraints.
//!
//! # Key Types
//!
//! - [`InstanceBuilder`]: validated construction, fails fast on malformed data
//! - [`TeamProblem`]: immutable instance with encode/decode/evaluate
//! - [`Evaluation`] / [`Diagnostics`]: evaluation results
//! - [`InstanceError`]: construction errors

mod allocation;
mod builder;
mod err;
mod evaluation;
mod problem;

pub use allocation::Allocation;
pub use builder::{InstanceBuilder, DEFAULT_LEVELS};
pub use err::{InstanceError, InstanceField};
pub use evaluation::{Diagnostics, Evaluation, DEFAULT_EPSILON};
pub use problem::{Genes, TeamProblem};

//! Skill-group neighborhood and constructive heuristic.
//!
//! Every search strategy in this crate moves through the solution space
//! with a single operator: [`reassign_skill_group`] rebuilds the allocation
//! of one skill group while leaving all others intact. Because each person
//! holds exactly one skill, the move never creates capacity conflicts with
//! other groups.
//!
//! [`construct_solution`] applies the move once per skill to build an
//! initial solution.

mod constructive;
mod reassign;

pub use constructive::construct_solution;
pub use reassign::{reassign_skill_group, reassign_skill_group_with, ShufflePolicy};

//! Command implementations for the branch-compare CLI

pub mod branches;
pub mod compare;
pub mod diff;

pub use branches::execute_branches;
pub use compare::execute_compare;
pub use diff::execute_diff;

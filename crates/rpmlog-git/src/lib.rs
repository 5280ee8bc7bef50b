//! rpmlog Git - Repository access for changelog derivation
//!
//! This crate provides the scratch workspace copy, the newest-first history
//! walk, forced tree checkout and per-commit change sets.

mod checkout;
mod commits;
mod diff;
mod repository;
#[cfg(test)]
mod test_support;
pub mod types;
mod workspace;

pub use commits::HistoryWalk;
pub use repository::{GitRepo, Result};
pub use types::{ChangeSet, CommitInfo};
pub use workspace::Workspace;

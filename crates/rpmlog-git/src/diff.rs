//! Per-commit change sets

use git2::Oid;
use tracing::debug;

use crate::repository::{GitRepo, Result};
use crate::types::ChangeSet;

impl GitRepo {
    /// Files changed by `hash` against its first parent.
    ///
    /// A root commit is diffed against the empty tree.
    pub fn changes(&self, hash: &str) -> Result<ChangeSet> {
        let commit = self.repo.find_commit(Oid::from_str(hash)?)?;
        let tree = commit.tree()?;

        let parent_tree = match commit.parents().next() {
            Some(parent) => Some(parent.tree()?),
            None => None,
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let files_changed = diff.stats()?.files_changed();
        let paths: Vec<String> = diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        debug!(commit = %commit.id(), files_changed, "computed change set");
        Ok(ChangeSet {
            files_changed,
            paths,
        })
    }
}

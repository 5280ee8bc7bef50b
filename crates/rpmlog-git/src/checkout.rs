//! Working tree materialization

use git2::build::CheckoutBuilder;
use git2::Oid;
use tracing::debug;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Force the working tree to match the tree of `hash`.
    ///
    /// Local modifications are discarded and missing files recreated. HEAD
    /// does not move, so this is only safe on a scratch copy.
    pub fn materialize(&self, hash: &str) -> Result<()> {
        let commit = self.repo.find_commit(Oid::from_str(hash)?)?;

        let mut checkout = CheckoutBuilder::new();
        checkout.force().recreate_missing(true);

        self.repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
        debug!(commit = %commit.id(), "working tree materialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_files, remove_file};
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_materialize_restores_old_content() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        let first = commit_files(repo.inner(), &[("pkg.spec", "Version: 1")], "One", 1_700_000_000);
        commit_files(repo.inner(), &[("pkg.spec", "Version: 2")], "Two", 1_700_000_100);

        repo.materialize(&first.to_string()).unwrap();
        let content = std::fs::read_to_string(temp.path().join("pkg.spec")).unwrap();
        assert_eq!(content, "Version: 1");
    }

    #[test]
    fn test_materialize_discards_dirty_state() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        let head = commit_files(repo.inner(), &[("pkg.spec", "clean")], "One", 1_700_000_000);
        std::fs::write(temp.path().join("pkg.spec"), "dirty").unwrap();

        repo.materialize(&head.to_string()).unwrap();
        let content = std::fs::read_to_string(temp.path().join("pkg.spec")).unwrap();
        assert_eq!(content, "clean");
    }

    #[test]
    fn test_materialize_recreates_missing_files() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        let with_spec = commit_files(repo.inner(), &[("pkg.spec", "spec")], "Add", 1_700_000_000);
        remove_file(repo.inner(), "pkg.spec", "Drop spec", 1_700_000_100);
        assert!(!temp.path().join("pkg.spec").exists());

        repo.materialize(&with_spec.to_string()).unwrap();
        assert!(temp.path().join("pkg.spec").exists());
    }

    #[test]
    fn test_materialize_unknown_commit() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        assert!(repo.materialize("0123456789abcdef0123456789abcdef01234567").is_err());
        assert!(repo.materialize("not-a-hash").is_err());
    }
}

//! Commit history operations

use chrono::{DateTime, TimeZone, Utc};
use git2::{Repository, Revwalk, Sort};
use tracing::debug;

use rpmlog_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

/// Newest-first walk over the checked-out branch.
///
/// Merge commits are skipped. The first commit older than the cutoff ends
/// the walk; nothing behind it is visited.
pub struct HistoryWalk<'r> {
    repo: &'r Repository,
    revwalk: Revwalk<'r>,
    cutoff: DateTime<Utc>,
    cutoff_reached: bool,
    finished: bool,
}

impl HistoryWalk<'_> {
    /// Whether the walk ended on a commit older than the cutoff
    pub fn cutoff_reached(&self) -> bool {
        self.cutoff_reached
    }

    fn fail(&mut self, err: GitError) -> Option<Result<CommitInfo>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl Iterator for HistoryWalk<'_> {
    type Item = Result<CommitInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let oid = match self.revwalk.next()? {
                Ok(oid) => oid,
                Err(e) => return self.fail(e.into()),
            };

            let commit = match self.repo.find_commit(oid) {
                Ok(commit) => commit,
                Err(e) => return self.fail(e.into()),
            };

            let info = match commit_to_info(&commit) {
                Ok(info) => info,
                Err(e) => return self.fail(e),
            };

            if info.is_merge() {
                debug!(commit = %info.short_hash, "skipping merge commit");
                continue;
            }

            if info.timestamp < self.cutoff {
                debug!(
                    commit = %info.short_hash,
                    timestamp = %info.timestamp,
                    cutoff = %self.cutoff,
                    "commit predates recency window, ending walk"
                );
                self.cutoff_reached = true;
                self.finished = true;
                return None;
            }

            return Some(Ok(info));
        }
    }
}

impl GitRepo {
    /// Walk the checked-out branch newest-first, stopping before `cutoff`
    pub fn walk_history(&self, cutoff: DateTime<Utc>) -> Result<HistoryWalk<'_>> {
        let tip = self.branch_tip()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(tip.id())?;

        debug!(tip = %tip.id(), cutoff = %cutoff, "starting history walk");

        Ok(HistoryWalk {
            repo: &self.repo,
            revwalk,
            cutoff,
            cutoff_reached: false,
            finished: false,
        })
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> Result<CommitInfo> {
    let hash = commit.id().to_string();
    let author = commit.author();

    let full_message = String::from_utf8_lossy(commit.message_bytes());
    let message = full_message.lines().next().unwrap_or_default().to_string();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .ok_or_else(|| GitError::InvalidTimestamp(hash.clone()))?;

    let parents = commit.parent_ids().map(|id| id.to_string()).collect();

    let info = CommitInfo::new(
        hash,
        message,
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes()),
        timestamp,
    )
    .with_parents(parents);

    Ok(match commit.body() {
        Some(body) => info.with_body(body),
        None => info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_files, merge_commit, side_commit};
    use git2::Repository;
    use tempfile::TempDir;

    const BASE: i64 = 1_700_000_000;

    fn cutoff_at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn setup_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        (temp, repo)
    }

    fn messages(repo: &GitRepo, cutoff: DateTime<Utc>) -> Vec<String> {
        repo.walk_history(cutoff)
            .unwrap()
            .map(|c| c.unwrap().message)
            .collect()
    }

    #[test]
    fn test_walk_newest_first() {
        let (_temp, repo) = setup_repo();
        commit_files(repo.inner(), &[("pkg.spec", "1")], "First", BASE);
        commit_files(repo.inner(), &[("pkg.spec", "2")], "Second", BASE + 10);
        commit_files(repo.inner(), &[("pkg.spec", "3")], "Third\n\nDetails here", BASE + 20);

        let commits: Vec<CommitInfo> = repo
            .walk_history(cutoff_at(0))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].message, "Third");
        assert_eq!(commits[0].body.as_deref(), Some("Details here"));
        assert_eq!(commits[0].author, "Test Packager");
        assert_eq!(commits[0].author_email, "packager@example.com");
        assert_eq!(commits[0].timestamp, cutoff_at(BASE + 20));
        assert_eq!(commits[2].message, "First");
        assert!(commits[2].parents.is_empty());
        assert_eq!(commits[1].parents, vec![commits[2].hash.clone()]);
    }

    #[test]
    fn test_walk_skips_merge_commits() {
        let (_temp, repo) = setup_repo();
        let base = commit_files(repo.inner(), &[("pkg.spec", "1")], "Base", BASE);
        let side = side_commit(repo.inner(), base, "Side", BASE + 10);
        commit_files(repo.inner(), &[("pkg.spec", "2")], "Main", BASE + 20);
        merge_commit(repo.inner(), side, "Merge side", BASE + 30);

        let seen = messages(&repo, cutoff_at(0));
        assert!(!seen.contains(&"Merge side".to_string()));
        assert_eq!(seen, vec!["Main", "Side", "Base"]);
    }

    #[test]
    fn test_walk_stops_at_cutoff() {
        let (_temp, repo) = setup_repo();
        commit_files(repo.inner(), &[("pkg.spec", "1")], "Ancient", BASE);
        commit_files(repo.inner(), &[("pkg.spec", "2")], "Old", BASE + 100);
        commit_files(repo.inner(), &[("pkg.spec", "3")], "Recent", BASE + 200);

        let mut walk = repo.walk_history(cutoff_at(BASE + 100)).unwrap();
        assert_eq!(walk.next().unwrap().unwrap().message, "Recent");
        // At the cutoff is still inside the window
        assert_eq!(walk.next().unwrap().unwrap().message, "Old");
        assert!(walk.next().is_none());
        assert!(walk.cutoff_reached());
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_walk_without_cutoff_reached() {
        let (_temp, repo) = setup_repo();
        commit_files(repo.inner(), &[("pkg.spec", "1")], "Only", BASE);

        let mut walk = repo.walk_history(cutoff_at(0)).unwrap();
        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
        assert!(!walk.cutoff_reached());
    }

    #[test]
    fn test_walk_empty_repo_fails() {
        let (_temp, repo) = setup_repo();
        assert!(repo.walk_history(cutoff_at(0)).is_err());
    }
}

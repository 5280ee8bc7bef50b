//! Progress reporting for the history walk

use std::path::Path;

use tracing::{debug, error, info};

use rpmlog_core::error::QueryError;
use rpmlog_git::{ChangeSet, CommitInfo};

use crate::types::{Nvr, StopReason};

/// Receives the events of one history walk.
///
/// Every method defaults to doing nothing.
pub trait WalkObserver {
    /// The scratch copy at `path` is ready; it is removed when the run ends
    fn workspace_prepared(&self, _path: &Path) {}

    /// A commit inside the recency window is about to be processed
    fn commit_visited(&self, _commit: &CommitInfo) {}

    /// The metadata query failed; the commit is skipped
    fn query_failed(&self, _commit: &CommitInfo, _error: &QueryError) {}

    /// The commit touched no relevant file
    fn commit_ignored(&self, _commit: &CommitInfo, _changes: &ChangeSet) {}

    /// The commit was added to the group for `nvr`
    fn commit_recorded(&self, _commit: &CommitInfo, _nvr: &Nvr) {}

    /// The walk ended
    fn walk_stopped(&self, _reason: &StopReason) {}
}

/// Forwards walk events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl WalkObserver for TracingObserver {
    fn workspace_prepared(&self, path: &Path) {
        debug!(workspace = %path.display(), "walking scratch copy");
    }

    fn commit_visited(&self, commit: &CommitInfo) {
        debug!(commit = %commit.short_hash, message = %commit.message, "visiting commit");
    }

    fn query_failed(&self, commit: &CommitInfo, err: &QueryError) {
        match err {
            QueryError::Failed {
                command,
                exit_code,
                stdout,
                stderr,
            } => {
                error!(
                    commit = %commit.short_hash,
                    command = %command,
                    exit_code = ?exit_code,
                    "metadata query failed, skipping commit"
                );
                error!("stdout:\n-------\n{}", stdout);
                error!("stderr:\n-------\n{}", stderr);
            }
            other => {
                error!(
                    commit = %commit.short_hash,
                    error = %other,
                    "metadata query failed, skipping commit"
                );
            }
        }
    }

    fn commit_ignored(&self, commit: &CommitInfo, changes: &ChangeSet) {
        debug!(
            commit = %commit.short_hash,
            files_changed = changes.files_changed,
            "commit touches no spec or patch file"
        );
    }

    fn commit_recorded(&self, commit: &CommitInfo, nvr: &Nvr) {
        debug!(commit = %commit.short_hash, nvr = %nvr, "commit recorded");
    }

    fn walk_stopped(&self, reason: &StopReason) {
        info!(reason = %reason, "history walk finished");
    }
}

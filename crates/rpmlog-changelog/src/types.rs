//! Changelog types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rpmlog_core::error::QueryError;
use rpmlog_git::CommitInfo;

/// Package name, version and release
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nvr {
    /// Package name
    pub name: String,
    /// Upstream version
    pub version: String,
    /// Release, without dist or arch suffix
    pub release: String,
}

impl Nvr {
    /// Create a new Nvr
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            release: release.into(),
        }
    }

    /// Parse a `name  version  release` line.
    ///
    /// Fields are separated by two spaces. The last `.suffix` of the release
    /// (`1.fc40` becomes `1`) is dropped.
    pub fn parse(line: &str) -> Result<Self, QueryError> {
        let malformed = || QueryError::Malformed(line.to_string());

        let fields: Vec<&str> = line.trim().split("  ").collect();
        let &[name, version, release] = fields.as_slice() else {
            return Err(malformed());
        };

        let release = match release.rsplit_once('.') {
            Some((head, _)) => head,
            None => release,
        };

        if [name, version, release].iter().any(|f| f.trim().is_empty()) {
            return Err(malformed());
        }

        Ok(Self::new(name, version, release))
    }

    /// `version-release`, as shown in changelog headers
    pub fn version_release(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }
}

impl fmt::Display for Nvr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.version, self.release)
    }
}

/// Commits that resolved to the same release, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogGroup {
    /// Release the commits belong to
    pub nvr: Nvr,
    /// Commits in walk order
    pub commits: Vec<CommitInfo>,
}

impl ChangelogGroup {
    /// Create an empty group
    pub fn new(nvr: Nvr) -> Self {
        Self {
            nvr,
            commits: Vec::new(),
        }
    }

    /// Entries for this group, oldest commit first.
    ///
    /// Only the last entry carries the version-release; it closes the
    /// release's block.
    pub fn entries(&self) -> Vec<ChangelogEntry> {
        let last = self.commits.len().saturating_sub(1);
        self.commits
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, commit)| {
                let version_release = (idx == last).then(|| self.nvr.version_release());
                ChangelogEntry::from_commit(commit, version_release)
            })
            .collect()
    }
}

/// Groups keyed by release, in the order releases were discovered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogGroups {
    groups: Vec<ChangelogGroup>,
}

impl ChangelogGroups {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `commit` to the group for `nvr`, creating the group at the end
    pub fn record(&mut self, nvr: Nvr, commit: CommitInfo) {
        match self.groups.iter_mut().find(|g| g.nvr == nvr) {
            Some(group) => group.commits.push(commit),
            None => {
                let mut group = ChangelogGroup::new(nvr);
                group.commits.push(commit);
                self.groups.push(group);
            }
        }
    }

    /// Iterate groups in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &ChangelogGroup> {
        self.groups.iter()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no commit was recorded
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Entries of every group, group after group
    pub fn entries(&self) -> Vec<ChangelogEntry> {
        self.groups.iter().flat_map(ChangelogGroup::entries).collect()
    }
}

/// One `%changelog` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Commit the entry was built from
    pub hash: String,
    /// Commit date
    pub date: DateTime<Utc>,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// `version-release`, only on the last entry of a release block
    pub version_release: Option<String>,
    /// First message line with surrounding dashes and spaces removed
    pub message: String,
    /// Remaining message text, not rendered in `%changelog` output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ChangelogEntry {
    /// Build an entry from a commit
    pub fn from_commit(commit: &CommitInfo, version_release: Option<String>) -> Self {
        Self {
            hash: commit.hash.clone(),
            date: commit.timestamp,
            author: commit.author.clone(),
            author_email: commit.author_email.clone(),
            version_release,
            message: clean_message(&commit.message),
            body: commit.body.clone(),
        }
    }
}

/// Strip leading and trailing `-` and space characters
pub fn clean_message(message: &str) -> String {
    message
        .trim_matches(|c| c == '-' || c == ' ')
        .to_string()
}

/// Why the history walk ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every commit of the branch was visited
    HistoryExhausted,
    /// A commit older than the recency window was reached
    CutoffReached,
    /// The spec file did not exist at this commit
    SpecFileMissing {
        /// Short hash of the commit
        commit: String,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HistoryExhausted => write!(f, "history exhausted"),
            Self::CutoffReached => write!(f, "recency window reached"),
            Self::SpecFileMissing { commit } => write!(f, "no spec file at {}", commit),
        }
    }
}

/// Counters for one history walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSummary {
    /// Non-merge commits inside the recency window
    pub visited: usize,
    /// Commits added to a group
    pub recorded: usize,
    /// Commits skipped because the metadata query failed
    pub query_failures: usize,
    /// Commits that touched no spec or patch file
    pub ignored: usize,
    /// Why the walk ended
    pub stop_reason: StopReason,
}

impl Default for WalkSummary {
    fn default() -> Self {
        Self {
            visited: 0,
            recorded: 0,
            query_failures: 0,
            ignored: 0,
            stop_reason: StopReason::HistoryExhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_commit(hash: &str, message: &str, seconds: i64) -> CommitInfo {
        CommitInfo::new(
            hash,
            message,
            "Test Packager",
            "packager@example.com",
            Utc.timestamp_opt(seconds, 0).unwrap(),
        )
    }

    #[test]
    fn test_parse_nvr() {
        let nvr = Nvr::parse("pkg  1.0  1.fc40\n").unwrap();
        assert_eq!(nvr, Nvr::new("pkg", "1.0", "1"));
        assert_eq!(nvr.version_release(), "1.0-1");
        assert_eq!(nvr.to_string(), "pkg-1.0-1");
    }

    #[test]
    fn test_parse_nvr_strips_only_last_release_suffix() {
        let nvr = Nvr::parse("python-foo  2.3.1  0.2.rc1.el9").unwrap();
        assert_eq!(nvr.version, "2.3.1");
        assert_eq!(nvr.release, "0.2.rc1");

        let plain = Nvr::parse("pkg  1.0  3").unwrap();
        assert_eq!(plain.release, "3");
    }

    #[test]
    fn test_parse_nvr_rejects_wrong_field_count() {
        assert!(matches!(Nvr::parse("pkg 1.0 1"), Err(QueryError::Malformed(_))));
        assert!(Nvr::parse("pkg  1.0").is_err());
        assert!(Nvr::parse("pkg  1.0  1  extra").is_err());
        assert!(Nvr::parse("").is_err());
        assert!(Nvr::parse("pkg  1.0  .fc40").is_err());
    }

    #[test]
    fn test_record_preserves_discovery_order() {
        let mut groups = ChangelogGroups::new();
        let new = Nvr::new("pkg", "2.0", "1");
        let old = Nvr::new("pkg", "1.0", "1");

        groups.record(new.clone(), make_commit("c3", "three", 300));
        groups.record(old.clone(), make_commit("c2", "two", 200));
        groups.record(new.clone(), make_commit("c1", "one", 100));

        let order: Vec<&Nvr> = groups.iter().map(|g| &g.nvr).collect();
        assert_eq!(order, vec![&new, &old]);
        let sizes: Vec<usize> = groups.iter().map(|g| g.commits.len()).collect();
        assert_eq!(sizes, vec![2, 1]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_entries_oldest_first_with_single_suffix() {
        let mut group = ChangelogGroup::new(Nvr::new("pkg", "1.0", "1"));
        group.commits.push(make_commit("c3", "Third", 300));
        group.commits.push(make_commit("c2", "Second", 200));
        group.commits.push(make_commit("c1", "First", 100));

        let entries = group.entries();
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["First", "Second", "Third"]);

        let suffixed: Vec<&ChangelogEntry> = entries
            .iter()
            .filter(|e| e.version_release.is_some())
            .collect();
        assert_eq!(suffixed.len(), 1);
        assert_eq!(suffixed[0].version_release.as_deref(), Some("1.0-1"));
        assert_eq!(entries.last().unwrap().version_release.as_deref(), Some("1.0-1"));
    }

    #[test]
    fn test_clean_message() {
        assert_eq!(clean_message("- Fix the build -"), "Fix the build");
        assert_eq!(clean_message("--  Update to 1.2"), "Update to 1.2");
        assert_eq!(clean_message("Rebuilt for F40"), "Rebuilt for F40");
        assert_eq!(clean_message("non-breaking-change"), "non-breaking-change");
    }
}

//! Changelog generation

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use rpmlog_core::config::Config;
use rpmlog_core::Result;
use rpmlog_git::{GitRepo, Workspace};

use crate::filter::RelevanceFilter;
use crate::formatter::{ChangelogFormatter, RpmFormatter};
use crate::observer::{TracingObserver, WalkObserver};
use crate::query::{resolve_nvr, MetadataQuery, RpmSpecQuery};
use crate::types::{ChangelogEntry, ChangelogGroups, StopReason, WalkSummary};

/// Everything collected from one history walk
#[derive(Debug, Clone, Serialize)]
pub struct Changelog {
    /// Relevant commits grouped by release
    pub groups: ChangelogGroups,
    /// Walk counters
    pub summary: WalkSummary,
}

impl Changelog {
    /// Rendered entries of every group
    pub fn entries(&self) -> Vec<ChangelogEntry> {
        self.groups.entries()
    }
}

/// Changelog generator
pub struct ChangelogGenerator {
    recency_days: u32,
    reference_time: Option<DateTime<Utc>>,
    filter: RelevanceFilter,
    query: Box<dyn MetadataQuery>,
    formatter: Box<dyn ChangelogFormatter>,
    observer: Box<dyn WalkObserver>,
}

impl ChangelogGenerator {
    /// Create a generator querying `rpm` and rendering RPM changelog text
    pub fn new(config: &Config) -> Self {
        Self {
            recency_days: config.changelog.recency_days,
            reference_time: None,
            filter: RelevanceFilter::from_config(&config.changelog),
            query: Box::new(RpmSpecQuery::new(&config.query)),
            formatter: Box::new(RpmFormatter::from_config(&config.changelog)),
            observer: Box::new(TracingObserver),
        }
    }

    /// Use a custom metadata query
    pub fn with_query<Q: MetadataQuery + 'static>(mut self, query: Q) -> Self {
        self.query = Box::new(query);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Use a custom walk observer
    pub fn with_observer<O: WalkObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Measure the recency window from `now` instead of the current time
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Oldest commit time still inside the recency window
    pub fn cutoff(&self) -> DateTime<Utc> {
        let now = self.reference_time.unwrap_or_else(Utc::now);
        now - Duration::days(i64::from(self.recency_days))
    }

    /// Copy the repository at `repo_path` to a scratch workspace and collect
    /// its relevant commits. The workspace is removed before returning.
    #[instrument(skip(self, repo_path), fields(repo = %repo_path.display()))]
    pub fn collect(&self, repo_path: &Path) -> Result<Changelog> {
        let workspace = Workspace::prepare(repo_path)?;
        self.observer.workspace_prepared(workspace.path());
        let changelog = self.collect_in(&workspace)?;

        info!(
            groups = changelog.groups.len(),
            visited = changelog.summary.visited,
            recorded = changelog.summary.recorded,
            query_failures = changelog.summary.query_failures,
            ignored = changelog.summary.ignored,
            "changelog collected"
        );
        Ok(changelog)
    }

    /// Collect relevant commits from an already prepared workspace.
    ///
    /// Every visited commit is checked out into the workspace.
    pub fn collect_in(&self, workspace: &Workspace) -> Result<Changelog> {
        let repo = GitRepo::open(workspace.path())?;
        let spec_path = workspace.spec_file();
        let spec_name = format!("{}.spec", workspace.name());

        let mut groups = ChangelogGroups::new();
        let mut summary = WalkSummary::default();
        let mut stop_reason = None;

        let mut walk = repo.walk_history(self.cutoff())?;
        for commit in walk.by_ref() {
            let commit = commit?;
            summary.visited += 1;
            self.observer.commit_visited(&commit);

            repo.materialize(&commit.hash)?;
            if !spec_path.exists() {
                stop_reason = Some(StopReason::SpecFileMissing {
                    commit: commit.short_hash.clone(),
                });
                break;
            }

            let nvr = match resolve_nvr(self.query.as_ref(), workspace.path(), &spec_name) {
                Ok(nvr) => nvr,
                Err(e) => {
                    summary.query_failures += 1;
                    self.observer.query_failed(&commit, &e);
                    continue;
                }
            };

            let changes = repo.changes(&commit.hash)?;
            if !self.filter.is_relevant(&changes) {
                summary.ignored += 1;
                self.observer.commit_ignored(&commit, &changes);
                continue;
            }

            self.observer.commit_recorded(&commit, &nvr);
            groups.record(nvr, commit);
            summary.recorded += 1;
        }

        summary.stop_reason = match stop_reason {
            Some(reason) => reason,
            None if walk.cutoff_reached() => StopReason::CutoffReached,
            None => StopReason::HistoryExhausted,
        };
        self.observer.walk_stopped(&summary.stop_reason);

        Ok(Changelog { groups, summary })
    }

    /// Format collected entries
    pub fn format(&self, changelog: &Changelog) -> Vec<String> {
        self.formatter.format(&changelog.entries())
    }

    /// Collect and format in one step
    pub fn generate(&self, repo_path: &Path) -> Result<Vec<String>> {
        let changelog = self.collect(repo_path)?;
        Ok(self.format(&changelog))
    }
}

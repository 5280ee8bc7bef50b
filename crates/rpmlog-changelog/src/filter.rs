//! Changelog relevance of commits

use rpmlog_core::config::ChangelogConfig;
use rpmlog_git::ChangeSet;

/// Decides whether a commit's change set belongs in the changelog
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    extensions: Vec<String>,
}

impl RelevanceFilter {
    /// Filter matching paths that end in one of `extensions`
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter using the configured extensions
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self::new(config.relevant_extensions.iter().cloned())
    }

    /// A commit is relevant when it changed at least one file and one of the
    /// changed paths ends in a configured extension.
    pub fn is_relevant(&self, changes: &ChangeSet) -> bool {
        if changes.is_empty() {
            return false;
        }

        changes
            .paths
            .iter()
            .any(|path| self.extensions.iter().any(|ext| path.ends_with(ext.as_str())))
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::from_config(&ChangelogConfig::default())
    }
}

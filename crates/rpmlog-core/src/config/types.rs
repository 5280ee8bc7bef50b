//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_CONTINUATION_INDENT, DEFAULT_QUERY_FORMAT, DEFAULT_QUERY_PROGRAM,
    DEFAULT_RECENCY_DAYS, DEFAULT_RELEVANT_EXTENSIONS, DEFAULT_WRAP_WIDTH,
};

/// Main configuration for rpmlog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog derivation configuration
    pub changelog: ChangelogConfig,

    /// Package metadata query configuration
    pub query: QueryConfig,
}

/// Changelog derivation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Commits older than this many days end the history walk
    pub recency_days: u32,

    /// Column at which entry messages are wrapped
    pub wrap_width: usize,

    /// Prefix for wrapped continuation lines
    pub continuation_indent: String,

    /// A commit is relevant when it touches a path ending in one of these
    pub relevant_extensions: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            recency_days: DEFAULT_RECENCY_DAYS,
            wrap_width: DEFAULT_WRAP_WIDTH,
            continuation_indent: DEFAULT_CONTINUATION_INDENT.to_string(),
            relevant_extensions: DEFAULT_RELEVANT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Package metadata query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Program run against the spec file
    pub program: String,

    /// Query format producing `name  version  release`
    pub query_format: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_QUERY_PROGRAM.to_string(),
            query_format: DEFAULT_QUERY_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.changelog.recency_days, 730);
        assert_eq!(config.changelog.wrap_width, 75);
        assert_eq!(config.changelog.relevant_extensions, vec![".spec", ".patch"]);
        assert_eq!(config.query.program, "rpm");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("changelog:\n  wrap_width: 60\n").unwrap();
        assert_eq!(config.changelog.wrap_width, 60);
        assert_eq!(config.changelog.recency_days, 730);
        assert_eq!(config.query.query_format, DEFAULT_QUERY_FORMAT);
    }
}

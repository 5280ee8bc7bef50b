//! RPM `%changelog` formatter

use rpmlog_core::config::ChangelogConfig;
use tracing::{debug, instrument};

use super::wrap::wrap;
use super::ChangelogFormatter;
use crate::types::ChangelogEntry;

/// Formats entries as RPM `%changelog` blocks:
///
/// ```text
/// * Mon Jan 15 2024 Jane Packager <jane@example.com> - 1.0-1
/// - Update to 1.0
///
/// ```
pub struct RpmFormatter {
    /// Column at which messages are wrapped
    pub wrap_width: usize,
    /// Prefix for wrapped continuation lines
    pub continuation_indent: String,
}

impl RpmFormatter {
    /// Create a formatter with the default 75-column wrap
    pub fn new() -> Self {
        Self::from_config(&ChangelogConfig::default())
    }

    /// Create a formatter from configuration
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self {
            wrap_width: config.wrap_width,
            continuation_indent: config.continuation_indent.clone(),
        }
    }

    /// Header line of an entry
    pub fn header(&self, entry: &ChangelogEntry) -> String {
        let mut header = format!(
            "* {} {} <{}>",
            entry.date.format("%a %b %d %Y"),
            entry.author,
            entry.author_email
        );
        if let Some(version_release) = &entry.version_release {
            header.push_str(" - ");
            header.push_str(version_release);
        }
        header
    }

    /// Message lines of an entry, `- ` on the first
    pub fn message_lines(&self, entry: &ChangelogEntry) -> Vec<String> {
        let mut wrapped = wrap(&entry.message, self.wrap_width, &self.continuation_indent);
        if wrapped.is_empty() {
            wrapped.push(String::new());
        }
        wrapped[0] = format!("- {}", wrapped[0]);
        wrapped
    }
}

impl Default for RpmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for RpmFormatter {
    #[instrument(skip(self, entries), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[ChangelogEntry]) -> Vec<String> {
        let mut lines = Vec::new();

        for entry in entries {
            lines.push(self.header(entry));
            lines.extend(self.message_lines(entry));
            lines.push(String::new());
        }

        debug!(line_count = lines.len(), "rpm changelog formatted");
        lines
    }
}

//! Changelog formatters

mod rpm;
mod wrap;

pub use rpm::RpmFormatter;
pub use wrap::wrap;

use crate::types::ChangelogEntry;

/// Trait for changelog formatters
pub trait ChangelogFormatter {
    /// Render entries to output lines, without trailing newlines
    fn format(&self, entries: &[ChangelogEntry]) -> Vec<String>;
}

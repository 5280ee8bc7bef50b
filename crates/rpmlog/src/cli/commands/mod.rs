//! CLI commands

mod generate_changelog;

pub use generate_changelog::GenerateChangelogCommand;

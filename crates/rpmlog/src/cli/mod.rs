//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::GenerateChangelogCommand;

/// rpmlog - RPM changelog generation from git history
#[derive(Debug, Parser)]
#[command(name = "rpmlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory to look up the configuration file from
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// RPM changelog text
    #[default]
    Text,
    /// JSON array of changelog entries
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate changelog entries from git commit logs
    GenerateChangelog(GenerateChangelogCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::GenerateChangelog(cmd) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_changelog() {
        let cli = Cli::try_parse_from(["rpmlog", "generate-changelog", "/src/pkg"]).unwrap();
        let Commands::GenerateChangelog(cmd) = &cli.command;
        assert_eq!(cmd.worktree_path, std::path::PathBuf::from("/src/pkg"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_worktree_path_is_required() {
        assert!(Cli::try_parse_from(["rpmlog", "generate-changelog"]).is_err());
    }

    #[test]
    fn test_global_format_flag() {
        let args = ["rpmlog", "generate-changelog", "pkg", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}

//! Generate-changelog command

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use rpmlog_changelog::ChangelogGenerator;
use rpmlog_core::config::load_config_or_default;

use crate::cli::{output, Cli, OutputFormat};

/// Generate changelog entries from git commit logs
#[derive(Debug, Args)]
pub struct GenerateChangelogCommand {
    /// Path to the package repository; its last path segment names the spec file
    #[arg(value_name = "WORKTREE_PATH")]
    pub worktree_path: PathBuf,
}

impl GenerateChangelogCommand {
    /// Execute the generate-changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(path = %self.worktree_path.display(), "executing generate-changelog command");

        let config_dir = match &cli.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let (config, config_path) = load_config_or_default(&config_dir)?;
        if let Some(path) = &config_path {
            info!(config = %path.display(), "using configuration file");
        }

        let generator = ChangelogGenerator::new(&config);
        let changelog = generator.collect(&self.worktree_path)?;

        if changelog.groups.is_empty() && !cli.quiet {
            output::warning(&format!(
                "No relevant commits found ({})",
                changelog.summary.stop_reason
            ));
        }

        let mut stdout = std::io::stdout().lock();
        match cli.format {
            OutputFormat::Text => write_text(&mut stdout, &generator.format(&changelog))?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&changelog.entries())?;
                writeln!(stdout, "{}", json)?;
            }
        }

        Ok(())
    }
}

/// Print `lines` joined by newlines plus a final newline; no lines print one
/// empty line.
fn write_text<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    writeln!(out, "{}", lines.join("\n"))
}

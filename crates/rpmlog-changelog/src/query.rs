//! Package metadata queries

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use rpmlog_core::config::QueryConfig;
use rpmlog_core::error::QueryError;

use crate::types::Nvr;

/// Source of the raw `name  version  release` output for a spec file
pub trait MetadataQuery {
    /// Query `spec_file` (relative to `workdir`) and return the tool's stdout
    fn query(&self, workdir: &Path, spec_file: &str) -> Result<String, QueryError>;
}

/// Runs `rpm --qf <format> --specfile <file>`
#[derive(Debug, Clone)]
pub struct RpmSpecQuery {
    program: String,
    query_format: String,
}

impl RpmSpecQuery {
    /// Create a query from configuration
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            program: config.program.clone(),
            query_format: config.query_format.clone(),
        }
    }

    fn command_line(&self, spec_file: &str) -> String {
        format!(
            "{} --qf {:?} --specfile {}",
            self.program, self.query_format, spec_file
        )
    }
}

impl Default for RpmSpecQuery {
    fn default() -> Self {
        Self::new(&QueryConfig::default())
    }
}

impl MetadataQuery for RpmSpecQuery {
    fn query(&self, workdir: &Path, spec_file: &str) -> Result<String, QueryError> {
        let command = self.command_line(spec_file);
        debug!(command = %command, workdir = %workdir.display(), "querying spec file");

        let output = Command::new(&self.program)
            .arg("--qf")
            .arg(&self.query_format)
            .arg("--specfile")
            .arg(spec_file)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| QueryError::Spawn {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(QueryError::Failed {
                command,
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Query `spec_file` and parse the first line of output into an [`Nvr`]
pub fn resolve_nvr(
    query: &dyn MetadataQuery,
    workdir: &Path,
    spec_file: &str,
) -> Result<Nvr, QueryError> {
    let output = query.query(workdir, spec_file)?;

    let line = output
        .trim()
        .lines()
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| QueryError::EmptyOutput(spec_file.to_string()))?;

    Nvr::parse(line)
}

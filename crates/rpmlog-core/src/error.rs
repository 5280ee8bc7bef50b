//! Error types for rpmlog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RpmlogError
pub type Result<T> = std::result::Result<T, RpmlogError>;

/// Main error type for rpmlog operations
#[derive(Debug, Error)]
pub enum RpmlogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Scratch workspace errors
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Package metadata query errors
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Repository has no working tree to check commits out into
    #[error("Repository has no working directory: {0}")]
    BareRepository(PathBuf),

    /// Commit timestamp cannot be represented
    #[error("Commit {0} has an invalid timestamp")]
    InvalidTimestamp(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Scratch workspace errors
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Source path is missing or not a directory
    #[error("Source repository path is not a directory: {0}")]
    InvalidSource(PathBuf),

    /// Source path has no final segment to name the copy after
    #[error("Source repository path has no final path segment: {0}")]
    UnnamedSource(PathBuf),

    /// Walking the source tree failed
    #[error("Failed to read {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Copying a file or directory failed
    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Package metadata query errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query program could not be started
    #[error("Failed to run `{command}`: {message}")]
    Spawn { command: String, message: String },

    /// The query program exited unsuccessfully
    #[error("Command `{command}` failed with exit code {exit_code:?}")]
    Failed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The query program printed nothing
    #[error("Command `{0}` produced no output")]
    EmptyOutput(String),

    /// The output line does not hold a name/version/release triple
    #[error("Malformed name/version/release line: {0:?}")]
    Malformed(String),
}

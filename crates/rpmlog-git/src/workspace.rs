//! Scratch copies of a repository
//!
//! The history walk checks out every visited commit, so it never runs against
//! the caller's checkout. A [`Workspace`] owns a temporary directory holding a
//! full copy of the repository and removes it when dropped.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use rpmlog_core::error::WorkspaceError;

/// A private, writable copy of a repository
pub struct Workspace {
    _dir: TempDir,
    name: String,
    path: PathBuf,
}

impl Workspace {
    /// Copy `source` into `<new temp dir>/<basename of source>`
    #[instrument(fields(source = %source.display()))]
    pub fn prepare(source: &Path) -> Result<Self, WorkspaceError> {
        if !source.is_dir() {
            return Err(WorkspaceError::InvalidSource(source.to_path_buf()));
        }

        let name = source_name(source)?;
        let root = source.canonicalize()?;

        let dir = TempDir::new()?;
        let path = dir.path().join(&name);
        copy_tree(&root, &path)?;

        info!(name = %name, copy = %path.display(), "prepared scratch workspace");
        Ok(Self {
            _dir: dir,
            name,
            path,
        })
    }

    /// Final path segment of the source repository
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the copied repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<name>.spec` at the root of the copy
    pub fn spec_file(&self) -> PathBuf {
        self.path.join(format!("{}.spec", self.name))
    }
}

/// Final path segment of `source` as given, so a symlinked checkout keeps the
/// link's name. Only `.`-style paths are resolved first.
fn source_name(source: &Path) -> Result<String, WorkspaceError> {
    let name = match source.file_name() {
        Some(name) => name.to_os_string(),
        None => source
            .canonicalize()?
            .file_name()
            .ok_or_else(|| WorkspaceError::UnnamedSource(source.to_path_buf()))?
            .to_os_string(),
    };
    Ok(name.to_string_lossy().into_owned())
}

/// Copy the directory at `source`, which must already be resolved
fn copy_tree(source: &Path, dest: &Path) -> Result<(), WorkspaceError> {
    let mut files = 0usize;

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| WorkspaceError::Walk {
            path: e.path().unwrap_or(source).to_path_buf(),
            message: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| WorkspaceError::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?;
        let target = dest.join(relative);
        let copy_err = |source| WorkspaceError::Copy {
            path: entry.path().to_path_buf(),
            source,
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            std::fs::create_dir_all(&target).map_err(copy_err)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target).map_err(copy_err)?;
            files += 1;
        } else {
            std::fs::copy(entry.path(), &target).map_err(copy_err)?;
            files += 1;
        }
    }

    debug!(files, dest = %dest.display(), "repository copied");
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
    let points_to = std::fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
    std::fs::copy(link, target).map(|_| ())
}

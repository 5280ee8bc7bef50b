//! Git repository operations

use std::path::{Path, PathBuf};

use git2::{BranchType, Repository};
use tracing::{debug, info, instrument};

use rpmlog_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a non-bare repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RepositoryNotFound(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo
            .workdir()
            .ok_or_else(|| GitError::BareRepository(path.to_path_buf()))?
            .to_path_buf();

        Ok(Self { repo, path })
    }

    /// Get the working tree path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the inner git2 Repository
    pub fn inner(&self) -> &Repository {
        &self.repo
    }

    /// Get the HEAD commit
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.repo.head()?;
        Ok(head.peel_to_commit()?)
    }

    /// Get the current branch name, `None` when HEAD is detached or unborn
    pub fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            Ok(head.shorthand().map(|s| s.to_string()))
        } else {
            Ok(None)
        }
    }

    /// Tip commit of the checked-out branch, or HEAD when detached
    pub fn branch_tip(&self) -> Result<git2::Commit<'_>> {
        match self.current_branch()? {
            Some(name) => {
                debug!(branch = %name, "resolving branch tip");
                let branch = self.repo.find_branch(&name, BranchType::Local)?;
                Ok(branch.get().peel_to_commit()?)
            }
            None => {
                debug!("HEAD is detached, walking from HEAD");
                self.head_commit()
            }
        }
    }
}

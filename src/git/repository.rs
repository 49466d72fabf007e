use crate::error::{AddTicketError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            AddTicketError::resolution(format!("Not in a git repository: {}", e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Short name of the branch `HEAD` is on
    ///
    /// A freshly initialised repository has no commits yet, so `HEAD` points
    /// at an unborn branch; its name is still read from the symbolic ref.
    pub fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(AddTicketError::resolution(
                        "HEAD is detached, not on a branch",
                    ));
                }
                let name = head.shorthand().ok_or_else(|| {
                    AddTicketError::resolution("Branch name is not valid UTF-8")
                })?;
                debug!(branch = name, "resolved current branch");
                Ok(name.to_string())
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => self.unborn_branch(),
            Err(e) => Err(e.into()),
        }
    }

    fn unborn_branch(&self) -> Result<String> {
        let head = self.repo.find_reference("HEAD")?;
        let target = head
            .symbolic_target()
            .ok_or_else(|| AddTicketError::resolution("HEAD is not a symbolic reference"))?;
        let name = target.strip_prefix(BRANCH_REF_PREFIX).ok_or_else(|| {
            AddTicketError::resolution(format!("HEAD points outside of branches: {}", target))
        })?;

        debug!(branch = name, "resolved unborn branch");
        Ok(name.to_string())
    }
}

impl super::BranchResolver for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        Git2Repository::current_branch(self)
    }
}

//! Branch lookup abstraction layer
//!
//! The ticket reader only needs one thing from git: the short name of the
//! branch `HEAD` points at. That is expressed by the [BranchResolver] trait so
//! the reader can be exercised without a repository on disk.
//!
//! - [repository::Git2Repository]: reads `HEAD` through the `git2` crate
//! - [mock::MockRepository]: returns a canned branch or failure for tests
//!
//! Plain closures returning [crate::error::Result<String>] also implement the
//! trait, which lets callers defer repository discovery until a branch is
//! actually needed:
//!
//! ```rust
//! # use add_ticket::git::{BranchResolver, Git2Repository};
//! let lazy = || Git2Repository::discover(".")?.current_branch();
//! # let _ = lazy.current_branch();
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Supplies the name of the currently checked out branch
///
/// ## Error Handling
///
/// Implementations report every failure (no repository, detached `HEAD`,
/// non UTF-8 branch name) as [crate::error::AddTicketError::Resolution] so the
/// configured error policy can decide what happens next.
pub trait BranchResolver {
    /// Short branch name, e.g. `feature/ch1234/foo` for `refs/heads/feature/ch1234/foo`
    fn current_branch(&self) -> Result<String>;
}

impl<F> BranchResolver for F
where
    F: Fn() -> Result<String>,
{
    fn current_branch(&self) -> Result<String> {
        self()
    }
}

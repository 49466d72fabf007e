use crate::error::{AddTicketError, Result};
use crate::git::BranchResolver;
use std::cell::Cell;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branch: std::result::Result<String, String>,
    lookups: Cell<usize>,
}

impl MockRepository {
    /// A repository checked out on `branch`
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: Ok(branch.into()),
            lookups: Cell::new(0),
        }
    }

    /// A repository whose branch cannot be resolved
    pub fn failing(reason: impl Into<String>) -> Self {
        MockRepository {
            branch: Err(reason.into()),
            lookups: Cell::new(0),
        }
    }

    /// Number of times the branch was asked for
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl BranchResolver for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.branch.clone().map_err(AddTicketError::Resolution)
    }
}

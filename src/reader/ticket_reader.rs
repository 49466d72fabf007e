use crate::domain::{ErrorPolicy, TicketPattern, TicketSource};
use crate::error::{AddTicketError, Result};
use crate::git::BranchResolver;
use tracing::debug;

/// Reads the ticket id from the current branch, applying the error policy
/// when the branch cannot be resolved or does not match
pub struct TicketReader<R> {
    resolver: R,
    pattern: TicketPattern,
    policy: ErrorPolicy,
}

impl<R: BranchResolver> TicketReader<R> {
    /// Create a new ticket reader
    pub fn new(resolver: R, pattern: TicketPattern, policy: ErrorPolicy) -> Self {
        TicketReader {
            resolver,
            pattern,
            policy,
        }
    }

    /// Ticket id for the current branch, or whatever the policy makes of a miss
    pub fn read(&self) -> Result<String> {
        match self.lookup() {
            Ok(ticket) => {
                debug!(ticket = %ticket, "ticket found in branch name");
                Ok(ticket)
            }
            Err(err) if err.is_policy_handled() => {
                debug!(error = %err, policy = %self.policy, "no ticket, applying policy");
                self.policy.handle(err)
            }
            Err(err) => Err(err),
        }
    }

    fn lookup(&self) -> Result<String> {
        let branch = self.resolver.current_branch()?;
        self.pattern
            .extract(&branch)
            .ok_or_else(|| AddTicketError::NoMatch {
                branch,
                pattern: self.pattern.to_string(),
            })
    }
}

impl<R: BranchResolver> TicketSource for TicketReader<R> {
    fn ticket(&self) -> Result<String> {
        self.read()
    }
}

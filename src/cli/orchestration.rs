//! Main workflow orchestration logic
//!
//! Keeps the prepare-commit-msg flow out of main.rs so it can be driven
//! programmatically, with any [BranchResolver], without going through clap.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::commit_file;
use crate::config;
use crate::domain::{ErrorPolicy, MessageUpdater, TicketPattern};
use crate::error::Result;
use crate::git::{BranchResolver, Git2Repository};
use crate::reader::TicketReader;

/// Arguments for the add-ticket workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Regular expression with one capture group
    pub pattern: String,

    /// Commit message file to update
    pub file: PathBuf,

    /// Policy chosen on the command line, if any
    pub policy: Option<ErrorPolicy>,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Print the result instead of writing the file
    pub dry_run: bool,
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// A ticket line was appended and written back
    Updated,
    /// The message already had a ticket line
    Unchanged,
    /// No ticket and the omit policy is active; the file was not touched
    Omitted,
    /// Dry run; holds the message that would have been written
    DryRun(String),
}

/// Run the workflow against the repository found from the current directory
///
/// Discovery happens only when the message actually needs a ticket.
pub fn run_workflow(args: &WorkflowArgs) -> Result<WorkflowOutcome> {
    run_workflow_with(args, || Git2Repository::discover(".")?.current_branch())
}

/// Main add-ticket workflow
///
/// 1. Compile the pattern (before anything touches git)
/// 2. Pick the error policy: CLI flag, else `--config` file, else omit
/// 3. Read the commit message
/// 4. Append the ticket line if missing
/// 5. Write the file back atomically, or hand the text back on dry runs
pub fn run_workflow_with<R: BranchResolver>(
    args: &WorkflowArgs,
    resolver: R,
) -> Result<WorkflowOutcome> {
    let pattern = TicketPattern::new(&args.pattern)?;

    let policy = match (&args.policy, &args.config_path) {
        (Some(policy), _) => policy.clone(),
        (None, Some(path)) => config::load_config(path)?.error_policy()?,
        (None, None) => ErrorPolicy::default(),
    };
    debug!(pattern = %pattern, policy = %policy, "workflow configured");

    let message = commit_file::read(&args.file)?;

    let updater = MessageUpdater::new(TicketReader::new(resolver, pattern, policy));
    let updated = match updater.update(message.clone()) {
        Ok(updated) => updated,
        Err(err) if err.is_silent() => {
            debug!("no ticket, leaving commit message untouched");
            return Ok(WorkflowOutcome::Omitted);
        }
        Err(err) => return Err(err),
    };

    if args.dry_run {
        return Ok(WorkflowOutcome::DryRun(updated));
    }

    if updated == message {
        debug!("commit message already has a ticket line");
        return Ok(WorkflowOutcome::Unchanged);
    }

    commit_file::write_atomic(&args.file, &updated)?;
    info!(file = %args.file.display(), "ticket line added");
    Ok(WorkflowOutcome::Updated)
}

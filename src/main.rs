use std::path::PathBuf;
use std::process::ExitCode;

use add_ticket::cli::{run_workflow, WorkflowArgs, WorkflowOutcome};
use add_ticket::domain::ErrorPolicy;
use add_ticket::ui;
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ADD_TICKET_LOG=debug`
const LOG_ENV: &str = "ADD_TICKET_LOG";

#[derive(clap::Parser)]
#[command(
    name = "add-ticket",
    version,
    about = "Append a 'Ticket: <id>' line taken from the current branch name to a commit message",
    long_about = "Append a 'Ticket: <id>' line taken from the current branch name to a commit message.\n\n\
                  Meant to run as a git prepare-commit-msg hook, e.g.\n  \
                  add-ticket '\\b(ch\\d+)\\b' \"$1\""
)]
#[command(group(ArgGroup::new("policy").args(["abort", "omit", "placeholder"])))]
struct Args {
    #[arg(help = "Regular expression with exactly one capture group matching the ticket id")]
    regexp: String,

    #[arg(help = "Commit message file to update")]
    file: PathBuf,

    #[arg(short, long, help = "Fail when the branch has no ticket")]
    abort: bool,

    #[arg(
        short,
        long,
        help = "Leave the message unchanged when the branch has no ticket (default)"
    )]
    omit: bool,

    #[arg(
        short,
        long,
        value_name = "TEXT",
        help = "Use TEXT as the ticket when the branch has none"
    )]
    placeholder: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the resulting message instead of writing the file")]
    dry_run: bool,
}

impl From<Args> for WorkflowArgs {
    fn from(args: Args) -> Self {
        WorkflowArgs {
            pattern: args.regexp,
            file: args.file,
            policy: ErrorPolicy::from_flags(args.abort, args.omit, args.placeholder),
            config_path: args.config,
            dry_run: args.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let workflow_args = WorkflowArgs::from(args);
    let file = workflow_args.file.display().to_string();

    let outcome = run_workflow(&workflow_args)
        .with_context(|| format!("Cannot add ticket to '{}'", file))?;

    if let WorkflowOutcome::DryRun(message) = outcome {
        ui::display_message(&message).context("Cannot write the dry-run message to stdout")?;
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

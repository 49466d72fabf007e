//! Command line workflow, kept independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_workflow, run_workflow_with, WorkflowArgs, WorkflowOutcome};

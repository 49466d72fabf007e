pub mod cli;
pub mod commit_file;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod reader;
pub mod ui;

pub use error::{AddTicketError, Result};

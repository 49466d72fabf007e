//! Terminal output for the hook.
//!
//! Git shows whatever a prepare-commit-msg hook prints, so the happy path stays
//! quiet; only errors and dry-run output reach the user.

use std::io::{self, IsTerminal, Write};

/// Format an error line, red when `color` is set.
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("\x1b[31mERROR:\x1b[0m {}", message)
    } else {
        format!("ERROR: {}", message)
    }
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message, io::stderr().is_terminal()));
}

/// Print the would-be commit message of a dry run, verbatim.
pub fn display_message(message: &str) -> io::Result<()> {
    write_message(&mut io::stdout().lock(), message)
}

fn write_message<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    out.write_all(message.as_bytes())?;
    out.flush()
}

use crate::error::{AddTicketError, Result};
use regex::Regex;
use std::fmt;

/// Branch-name pattern with exactly one capture group holding the ticket id
/// (e.g., `\b(ch\d+)\b`, `([A-Z]+-\d+)`)
#[derive(Debug, Clone)]
pub struct TicketPattern {
    regex: Regex,
}

impl TicketPattern {
    /// Compile a ticket pattern, rejecting anything but a single capture group
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            AddTicketError::config(format!("Invalid regular expression '{}': {}", pattern, e))
        })?;

        // captures_len() counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(AddTicketError::config(format!(
                "Pattern '{}' must contain exactly 1 capture group, found {}",
                pattern, groups
            )));
        }

        Ok(TicketPattern { regex })
    }

    /// Extract the ticket id from the first match in `text`
    ///
    /// Returns `None` when nothing matches, or when the first match did not
    /// set the capture group (e.g., `(x)?y` against `"y"`).
    pub fn extract(&self, text: &str) -> Option<String> {
        self.regex
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str().to_string())
    }

    /// The source text of the pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Display for TicketPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

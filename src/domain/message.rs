use crate::error::Result;

/// Prefix that marks a commit message line as the ticket line
pub const TICKET_PREFIX: &str = "Ticket: ";

/// Anything that can hand out the ticket id for the commit being prepared
pub trait TicketSource {
    fn ticket(&self) -> Result<String>;
}

impl<F> TicketSource for F
where
    F: Fn() -> Result<String>,
{
    fn ticket(&self) -> Result<String> {
        self()
    }
}

/// Check whether any line of the message starts with `Ticket: `
pub fn has_ticket_line(message: &str) -> bool {
    message
        .split('\n')
        .any(|line| line.starts_with(TICKET_PREFIX))
}

/// Append `Ticket: <ticket>` separated from the body by the trailing-newline rule:
/// a message already ending in a blank line keeps exactly one, anything else
/// gets a single newline before the ticket line.
pub fn append_ticket_line(message: &str, ticket: &str) -> String {
    let mut updated = if message.ends_with("\n\n") {
        let mut body = message.trim_end_matches('\n').to_string();
        body.push_str("\n\n");
        body
    } else {
        let mut body = message.to_string();
        body.push('\n');
        body
    };

    updated.push_str(TICKET_PREFIX);
    updated.push_str(ticket);
    updated.push('\n');
    updated
}

/// Decides whether and how a commit message gets its ticket line
pub struct MessageUpdater<S> {
    source: S,
}

impl<S: TicketSource> MessageUpdater<S> {
    pub fn new(source: S) -> Self {
        MessageUpdater { source }
    }

    /// Return the message with a ticket line, asking the source only when one is missing
    pub fn update(&self, message: String) -> Result<String> {
        if has_ticket_line(&message) {
            return Ok(message);
        }

        let ticket = self.source.ticket()?;
        Ok(append_ticket_line(&message, &ticket))
    }
}

//! Domain logic - pure commit-message rules independent of git

pub mod message;
pub mod pattern;
pub mod policy;

pub use message::{append_ticket_line, has_ticket_line, MessageUpdater, TicketSource, TICKET_PREFIX};
pub use pattern::TicketPattern;
pub use policy::ErrorPolicy;

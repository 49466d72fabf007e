//! Ticket lookup: branch resolution, extraction and the error policy combined

pub mod ticket_reader;

pub use ticket_reader::TicketReader;

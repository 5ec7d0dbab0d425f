//! Core domain types for ticketapp
//!
//! This module contains the ticket entity and its supporting types.
//! These types carry no storage or UI concerns; validation of user
//! input happens in the CLI form layer, not here.

mod builders;
mod ticket;

pub use builders::TicketBuilder;
pub use ticket::{Status, Ticket, TicketDraft, TicketId, TicketPatch};

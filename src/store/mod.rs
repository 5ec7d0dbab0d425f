//! Store layer for ticketapp
//!
//! Two stores make up the application state:
//!
//! - [`TicketStore`] — an ordered, in-memory collection of tickets.
//!   Its contents live only as long as the owning process.
//! - [`SessionStore`] — a single persisted credential slot that
//!   survives restarts.
//!
//! The stores hold no reference to the CLI; the composition root
//! constructs them and hands them to whatever consumes them.

mod memory;
mod session;

pub use memory::TicketStore;
pub use session::{Session, SessionStore, SESSION_FILE};

use crate::core::{Ticket, TicketDraft, TicketId, TicketPatch};
use crate::error::Result;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface for storing and retrieving tickets,
/// allowing for different storage implementations behind the same seam.
/// The in-memory [`TicketStore`] is the only implementation in this
/// crate.
pub trait TicketRepository {
    /// Returns all tickets in insertion order
    fn list(&self) -> Vec<Ticket>;

    /// Creates a ticket from a draft, assigning a fresh ID and timestamp
    fn create(&mut self, draft: TicketDraft) -> Result<Ticket>;

    /// Merges a patch over the ticket with the given ID
    fn update(&mut self, id: &TicketId, patch: TicketPatch) -> Result<Ticket>;

    /// Removes the ticket with the given ID, returning it
    fn delete(&mut self, id: &TicketId) -> Result<Ticket>;

    /// Looks up a ticket by ID
    fn get(&self, id: &TicketId) -> Option<Ticket>;

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool;

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool;
}

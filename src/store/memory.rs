//! In-memory ticket store
//!
//! Holds the full ticket collection in process memory. All operations
//! are synchronous linear scans, which is fine at the scale this
//! application targets. Nothing here survives a restart.

use chrono::{Duration, Utc};

use super::TicketRepository;
use crate::core::{Status, Ticket, TicketBuilder, TicketDraft, TicketId, TicketPatch};
use crate::error::{Result, TicketAppError};

/// Ordered, in-memory collection of tickets
///
/// Insertion order is preserved by every operation. ID uniqueness is
/// enforced when a record is inserted; updates cannot change IDs, so
/// the invariant holds for the life of the store.
#[derive(Debug, Default, Clone)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the two example tickets
    ///
    /// The seed records mirror the sample data every fresh installation
    /// starts with: one open incident from an hour ago and one
    /// in-progress bug from two hours ago.
    #[must_use]
    pub fn with_seed_data() -> Self {
        let now = Utc::now();
        Self {
            tickets: vec![
                TicketBuilder::new()
                    .title("Server Down Issue")
                    .description("Production server is not responding to requests")
                    .status(Status::Open)
                    .created_at(now - Duration::hours(1))
                    .build(),
                TicketBuilder::new()
                    .title("Login Page Bug")
                    .description("Users unable to log in using social auth")
                    .status(Status::InProgress)
                    .created_at(now - Duration::hours(2))
                    .build(),
            ],
        }
    }

    /// Create a store from existing tickets, enforcing ID uniqueness
    pub fn from_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        let mut store = Self::new();
        for ticket in tickets {
            store.insert(ticket)?;
        }
        Ok(store)
    }

    /// Number of tickets in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the store holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Borrow the tickets in insertion order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Count tickets with the given status
    #[must_use]
    pub fn count_by_status(&self, status: Status) -> usize {
        self.tickets.iter().filter(|t| t.status == status).count()
    }

    fn insert(&mut self, ticket: Ticket) -> Result<()> {
        if self.tickets.iter().any(|t| t.id == ticket.id) {
            return Err(TicketAppError::DuplicateTicketId {
                id: ticket.id.to_string(),
            });
        }
        self.tickets.push(ticket);
        Ok(())
    }

    fn position(&self, id: &TicketId) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == *id)
    }
}

impl TicketRepository for TicketStore {
    fn list(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    fn create(&mut self, draft: TicketDraft) -> Result<Ticket> {
        let ticket = Ticket::new(draft.title, draft.description, draft.status);
        tracing::debug!(id = %ticket.id, "creating ticket");
        self.insert(ticket.clone())?;
        Ok(ticket)
    }

    fn update(&mut self, id: &TicketId, patch: TicketPatch) -> Result<Ticket> {
        let index = self
            .position(id)
            .ok_or_else(|| TicketAppError::TicketNotFound { id: id.to_string() })?;
        self.tickets[index].apply(patch);
        Ok(self.tickets[index].clone())
    }

    fn delete(&mut self, id: &TicketId) -> Result<Ticket> {
        let index = self
            .position(id)
            .ok_or_else(|| TicketAppError::TicketNotFound { id: id.to_string() })?;
        tracing::debug!(id = %id, "deleting ticket");
        Ok(self.tickets.remove(index))
    }

    fn get(&self, id: &TicketId) -> Option<Ticket> {
        self.position(id).map(|i| self.tickets[i].clone())
    }

    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.tickets.iter().filter(|t| predicate(t)).cloned().collect()
    }

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool,
    {
        self.tickets.iter().filter(|t| predicate(t)).count()
    }
}

//! ticketapp - a minimal ticket-tracking application
//!
//! This crate provides two small stores and a CLI on top of them:
//! - An in-memory ticket store with create/update/delete/lookup
//!   operations, seeded with sample data
//! - A file-backed session store holding a single opaque login token
//!
//! Tickets are deliberately not persisted; they live for the duration
//! of one interactive session. The login token survives restarts.
//!
//! # Example
//!
//! ```rust
//! use ticketapp::core::{TicketDraft, TicketPatch, Status};
//! use ticketapp::store::{TicketRepository, TicketStore};
//!
//! let mut store = TicketStore::with_seed_data();
//! let ticket = store
//!     .create(TicketDraft::new("Broken search", "Search returns no results"))
//!     .unwrap();
//! store
//!     .update(&ticket.id, TicketPatch::new().status(Status::Closed))
//!     .unwrap();
//! assert_eq!(store.len(), 3);
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketAppError};

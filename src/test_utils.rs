//! Test utilities for ticketapp
//!
//! Common fixtures to reduce duplication in test code across the
//! codebase.

#![cfg(test)]

use std::path::PathBuf;
use tempfile::TempDir;

use crate::cli::utils::DATA_DIR;
use crate::core::{Status, Ticket, TicketBuilder};
use crate::store::{SessionStore, TicketStore};

/// Test fixture for an initialized project directory
pub struct TestProject {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
    pub data_dir: PathBuf,
}

impl TestProject {
    /// Create a new test project with an initialized data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_root = temp_dir.path().to_path_buf();
        let data_dir = project_root.join(DATA_DIR);

        std::fs::create_dir(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            project_root,
            data_dir,
        }
    }

    /// Create a test project with a logged-in session
    pub fn logged_in(token: &str) -> Self {
        let project = Self::new();
        let mut session = project.session();
        session.login(token).expect("Failed to log in");
        project
    }

    /// Open a session store over this project's data directory
    pub fn session(&self) -> SessionStore {
        SessionStore::open(&self.data_dir).expect("Failed to open session store")
    }

    /// Get the project root path as a string
    pub fn root_path_str(&self) -> &str {
        self.project_root.to_str().expect("Invalid path")
    }
}

/// Create a test ticket with default values
pub fn create_test_ticket(title: &str, status: Status) -> Ticket {
    TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .status(status)
        .build()
}

/// Create a store holding the given number of open tickets
pub fn store_with_tickets(count: usize) -> TicketStore {
    let tickets = (0..count)
        .map(|i| create_test_ticket(&format!("Ticket {i}"), Status::Open))
        .collect();
    TicketStore::from_tickets(tickets).expect("Failed to build store")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.data_dir.exists());
    }

    #[test]
    fn test_logged_in_project() {
        let project = TestProject::logged_in("abc");
        assert!(project.session().is_authenticated());
    }

    #[test]
    fn test_store_with_tickets() {
        let store = store_with_tickets(4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.tickets()[0].title, "Ticket 0");
    }
}

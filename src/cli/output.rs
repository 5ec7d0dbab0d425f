//! Output formatting for the CLI
//!
//! Centralizes how results, errors, and tickets are printed so handlers
//! never write to stdout/stderr directly. Supports plain, colored, and
//! JSON output.

use colored::Colorize;
use serde::Serialize;

use crate::core::{Status, Ticket};
use crate::error::Result;

/// Formats command output for the terminal
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{message}");
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a one-line summary of a ticket
    pub fn ticket_line(&self, index: usize, ticket: &Ticket) {
        let status = self.status_label(ticket.status);
        let created = ticket.created_at.format("%Y-%m-%d %H:%M");
        println!(
            "{:>3}. [{status}] {}: {}  (id: {}, created: {created})",
            index + 1,
            ticket.title,
            ticket.description,
            ticket.id,
        );
    }

    /// Print the full details of a ticket
    pub fn ticket_details(&self, ticket: &Ticket) {
        println!("ID:          {}", ticket.id);
        println!("Title:       {}", ticket.title);
        println!("Description: {}", ticket.description);
        println!("Status:      {}", self.status_label(ticket.status));
        println!("Created:     {}", ticket.created_at.to_rfc3339());
    }

    fn status_label(&self, status: Status) -> String {
        if self.no_color {
            return status.label().to_string();
        }
        match status {
            Status::Open => status.label().red().to_string(),
            Status::InProgress => status.label().yellow().to_string(),
            Status::Closed => status.label().green().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_flag() {
        let formatter = OutputFormatter::new(true, false);
        assert!(formatter.is_json());

        let formatter = OutputFormatter::new(false, true);
        assert!(!formatter.is_json());
    }

    #[test]
    fn test_plain_status_label() {
        let formatter = OutputFormatter::new(false, true);
        assert_eq!(formatter.status_label(Status::InProgress), "in progress");
    }
}

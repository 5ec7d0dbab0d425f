//! Command handlers
//!
//! Each submodule implements one CLI command. Handlers receive the
//! parsed arguments and an [`OutputFormatter`]; they own all business
//! logic and never parse arguments themselves.
//!
//! [`OutputFormatter`]: crate::cli::OutputFormatter

mod auth;
mod init;
mod tickets;

pub use auth::{handle_login, handle_logout, handle_whoami};
pub use init::handle_init;
pub use tickets::handle_tickets_command;

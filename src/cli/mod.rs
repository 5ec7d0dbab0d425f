//! Command-line interface for ticketapp
//!
//! Defines the clap argument surface and re-exports the pieces the
//! binary entry point needs. Business logic lives in [`handlers`].

pub mod handlers;
pub mod output;
pub mod utils;
pub mod validate;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// A minimal ticket-tracking application
#[derive(Parser)]
#[command(name = "ticketapp", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the project directory
    #[arg(short, long, global = true, env = "TICKETAPP_PROJECT_DIR")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a ticketapp project in the current directory
    Init {
        /// Project name
        #[arg(short, long)]
        name: Option<String>,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,

        /// Reinitialize even if a project already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Log in with a session token
    Login {
        /// Opaque session token (prompted for when omitted)
        token: Option<String>,
    },

    /// Log out, clearing the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Start an interactive ticket-management session
    Tickets {
        /// Start with an empty store instead of the sample tickets
        #[arg(long)]
        empty: bool,
    },
}

//! ticketapp - minimal ticket-tracking application
//!
//! This is the main entry point for the ticketapp CLI. It parses
//! command-line arguments, builds the output formatter, and dispatches
//! to the appropriate command handler.

use clap::Parser;
use std::process;
use ticketapp::cli::{handlers, Cli, Commands, OutputFormatter};
use ticketapp::error::Result;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let project = cli.project.as_deref();

    match cli.command {
        Commands::Init {
            name,
            description,
            force,
        } => handlers::handle_init(name.as_deref(), description.as_deref(), force, project, formatter),
        Commands::Login { token } => handlers::handle_login(token, project, formatter),
        Commands::Logout => handlers::handle_logout(project, formatter),
        Commands::Whoami => handlers::handle_whoami(project, formatter),
        Commands::Tickets { empty } => handlers::handle_tickets_command(empty, project, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Shows the user-facing message, any suggestions for fixing the
/// problem, and a structured JSON error object in JSON mode.
fn handle_error(error: &ticketapp::error::TicketAppError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

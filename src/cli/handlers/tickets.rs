//! Handler for the `tickets` command
//!
//! Runs an interactive ticket-management session over the in-memory
//! ticket store. The store is constructed when the session starts and
//! discarded when it ends; only the login session persists between
//! runs. Requires a logged-in session.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output::OutputFormatter;
use crate::cli::utils::data_dir;
use crate::cli::validate;
use crate::core::{Status, TicketDraft, TicketId, TicketPatch};
use crate::error::{Result, TicketAppError};
use crate::store::{SessionStore, TicketRepository, TicketStore};

/// Status counts shown on the dashboard
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

/// Compute dashboard statistics for a store
#[must_use]
pub fn dashboard_stats(store: &TicketStore) -> DashboardStats {
    DashboardStats {
        total: store.len(),
        open: store.count_by_status(Status::Open),
        in_progress: store.count_by_status(Status::InProgress),
        closed: store.count_by_status(Status::Closed),
    }
}

/// Handle the `tickets` command
pub fn handle_tickets_command(
    empty: bool,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let dir = data_dir(project)?;
    let session = SessionStore::open(&dir)?;
    if !session.is_authenticated() {
        return Err(TicketAppError::NotLoggedIn);
    }

    // The composition root owns the store; it lives for this session only.
    let mut store = if empty {
        TicketStore::new()
    } else {
        TicketStore::with_seed_data()
    };
    tracing::debug!(tickets = store.len(), "starting interactive session");

    let theme = ColorfulTheme::default();
    formatter.info("Ticket management — tickets live in memory for this session only.\n");

    loop {
        let actions = [
            "Dashboard",
            "List tickets",
            "Show ticket",
            "Create ticket",
            "Edit ticket",
            "Delete ticket",
            "Quit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&actions)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => {
                show_dashboard(&store, formatter);
                Ok(())
            },
            1 => {
                list_tickets(&store, formatter);
                Ok(())
            },
            2 => show_ticket(&store, &theme, formatter),
            3 => create_ticket(&mut store, &theme, formatter),
            4 => edit_ticket(&mut store, &theme, formatter),
            5 => delete_ticket(&mut store, &theme, formatter),
            _ => break,
        };

        // Recoverable mistakes keep the session alive; real failures end it.
        if let Err(e) = outcome {
            if e.is_recoverable() {
                formatter.warning(&e.user_message());
            } else {
                return Err(e);
            }
        }
        println!();
    }

    formatter.info("Session ended; in-memory tickets discarded.");
    Ok(())
}

fn show_dashboard(store: &TicketStore, formatter: &OutputFormatter) {
    let stats = dashboard_stats(store);
    formatter.info("Overview of your ticket management system:");
    formatter.info(&format!("  Total Tickets: {}", stats.total));
    formatter.info(&format!("  Open Tickets:  {}", stats.open));
    formatter.info(&format!("  In Progress:   {}", stats.in_progress));
    formatter.info(&format!("  Closed:        {}", stats.closed));
}

fn list_tickets(store: &TicketStore, formatter: &OutputFormatter) {
    if store.is_empty() {
        formatter.info("No tickets yet.");
        return;
    }
    for (index, ticket) in store.tickets().iter().enumerate() {
        formatter.ticket_line(index, ticket);
    }
}

fn show_ticket(
    store: &TicketStore,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let Some(id) = select_ticket(store, theme, "Which ticket?")? else {
        formatter.info("No tickets yet.");
        return Ok(());
    };
    let ticket = store
        .get(&id)
        .ok_or_else(|| TicketAppError::TicketNotFound { id: id.to_string() })?;
    formatter.ticket_details(&ticket);
    Ok(())
}

fn create_ticket(
    store: &mut TicketStore,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .validate_with(|input: &String| {
            validate::validate_title(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .validate_with(|input: &String| {
            validate::validate_description(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let status = select_status(theme, "Status", Status::Open)?;

    let draft = TicketDraft::new(title, description).with_status(status);
    // The prompts validated already; this is the form-layer precondition
    // the store relies on.
    validate::validate_draft(&draft)?;

    let ticket = store.create(draft)?;
    formatter.success(&format!("Ticket created successfully! (id: {})", ticket.id));
    Ok(())
}

fn edit_ticket(
    store: &mut TicketStore,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let Some(id) = select_ticket(store, theme, "Which ticket do you want to edit?")? else {
        formatter.info("No tickets yet.");
        return Ok(());
    };
    let current = store
        .get(&id)
        .ok_or_else(|| TicketAppError::TicketNotFound { id: id.to_string() })?;

    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .with_initial_text(current.title.clone())
        .validate_with(|input: &String| {
            validate::validate_title(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(current.description.clone())
        .validate_with(|input: &String| {
            validate::validate_description(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let status = select_status(theme, "Status", current.status)?;

    // Only changed fields go into the patch; unchanged ones stay merged
    // from the stored record.
    let mut patch = TicketPatch::new();
    if title != current.title {
        patch = patch.title(title);
    }
    if description != current.description {
        patch = patch.description(description);
    }
    if status != current.status {
        patch = patch.status(status);
    }

    if patch.is_empty() {
        formatter.info("Nothing changed.");
        return Ok(());
    }

    validate::validate_patch(&patch)?;
    store.update(&id, patch)?;
    formatter.success("Ticket updated successfully!");
    Ok(())
}

fn delete_ticket(
    store: &mut TicketStore,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let Some(id) = select_ticket(store, theme, "Which ticket do you want to delete?")? else {
        formatter.info("No tickets yet.");
        return Ok(());
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Are you sure you want to delete this ticket?")
        .default(false)
        .interact()?;
    if !confirmed {
        formatter.info("Delete cancelled.");
        return Ok(());
    }

    store.delete(&id)?;
    formatter.success("Ticket deleted successfully!");
    Ok(())
}

/// Let the user pick a ticket; `None` when the store is empty
fn select_ticket(
    store: &TicketStore,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<TicketId>> {
    if store.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = store
        .tickets()
        .iter()
        .map(|t| format!("[{}] {}", t.status.label(), t.title))
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(store.tickets()[selection].id.clone()))
}

fn select_status(theme: &ColorfulTheme, prompt: &str, current: Status) -> Result<Status> {
    let labels: Vec<&str> = Status::ALL.iter().map(|s| s.label()).collect();
    let default = Status::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Status::ALL[selection])
}

//! Handler for the `init` command

use std::fs;
use std::path::PathBuf;

use crate::cli::output::OutputFormatter;
use crate::cli::utils::DATA_DIR;
use crate::config::{Config, ProjectConfig};
use crate::error::{Result, TicketAppError};

/// Initialize a ticketapp project
///
/// Creates the `.ticketapp` data directory and writes the initial
/// configuration file. Refuses to overwrite an existing project unless
/// `force` is set.
pub fn handle_init(
    name: Option<&str>,
    description: Option<&str>,
    force: bool,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let root = match project {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };
    let data_dir = root.join(DATA_DIR);

    if data_dir.exists() && !force {
        return Err(TicketAppError::AlreadyInitialized {
            path: data_dir.display().to_string(),
        });
    }

    fs::create_dir_all(&data_dir)?;

    let project_name = name.map_or_else(
        || {
            root.file_name()
                .map_or_else(|| "TicketApp".to_string(), |n| n.to_string_lossy().to_string())
        },
        str::to_string,
    );

    let config = Config {
        project: ProjectConfig {
            name: project_name.clone(),
            description: description.map(str::to_string),
        },
    };
    config.save_to(&data_dir)?;

    tracing::info!(project = %project_name, path = %data_dir.display(), "initialized project");
    formatter.success(&format!(
        "Initialized ticketapp project '{project_name}' in {}",
        data_dir.display()
    ));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "ok",
            "project": project_name,
            "path": data_dir.display().to_string(),
        }))?;
    }

    Ok(())
}

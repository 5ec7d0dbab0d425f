//! Shared helpers for CLI handlers

use std::path::{Path, PathBuf};

use crate::error::{Result, TicketAppError};

/// Name of the project data directory
pub const DATA_DIR: &str = ".ticketapp";

/// Find the project root by walking up from a starting directory
///
/// The project root is the first ancestor (including the starting
/// directory itself) that contains a `.ticketapp` directory.
pub fn find_project_root(start: Option<&str>) -> Result<PathBuf> {
    let start = match start {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    let mut current: &Path = &start;
    loop {
        if current.join(DATA_DIR).is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(TicketAppError::ProjectNotInitialized),
        }
    }
}

/// Resolve the data directory for an existing project
pub fn data_dir(project: Option<&str>) -> Result<PathBuf> {
    Ok(find_project_root(project)?.join(DATA_DIR))
}

//! Handlers for the `login`, `logout`, and `whoami` commands
//!
//! The session is a client-held token with no verification behind it;
//! these handlers only move it in and out of the persisted slot.

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output::OutputFormatter;
use crate::cli::utils::data_dir;
use crate::error::Result;
use crate::store::SessionStore;

/// Handle the `login` command
///
/// Stores the provided token; prompts for one when omitted.
pub fn handle_login(
    token: Option<String>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let dir = data_dir(project)?;
    let mut session = SessionStore::open(&dir)?;

    let token = match token {
        Some(t) => t,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Session token")
            .interact_text()?,
    };

    session.login(&token)?;
    tracing::info!("logged in");

    formatter.success("Logged in");
    if formatter.is_json() {
        formatter.json(&serde_json::json!({ "status": "ok", "loggedIn": true }))?;
    }
    Ok(())
}

/// Handle the `logout` command; idempotent
pub fn handle_logout(project: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let dir = data_dir(project)?;
    let mut session = SessionStore::open(&dir)?;

    let was_logged_in = session.is_authenticated();
    session.logout()?;
    tracing::info!("logged out");

    if was_logged_in {
        formatter.success("Logged out");
    } else {
        formatter.info("Already logged out");
    }
    if formatter.is_json() {
        formatter.json(&serde_json::json!({ "status": "ok", "loggedIn": false }))?;
    }
    Ok(())
}

/// Handle the `whoami` command
pub fn handle_whoami(project: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let dir = data_dir(project)?;
    let session = SessionStore::open(&dir)?;

    match session.current_user() {
        Some(user) => {
            formatter.info(&format!("Logged in with token: {}", user.token()));
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "loggedIn": true,
                    "token": user.token(),
                }))?;
            }
        },
        None => {
            formatter.info("Not logged in");
            if formatter.is_json() {
                formatter.json(&serde_json::json!({ "loggedIn": false }))?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestProject;
    use tempfile::TempDir;

    #[test]
    fn test_login_logout_roundtrip() {
        let project = TestProject::new();
        let formatter = OutputFormatter::new(false, true);
        let root = Some(project.root_path_str());

        handle_login(Some("abc".to_string()), root, &formatter).unwrap();
        assert_eq!(project.session().current_user().unwrap().token(), "abc");

        handle_logout(root, &formatter).unwrap();
        assert!(project.session().current_user().is_none());
    }

    #[test]
    fn test_logout_without_session_is_ok() {
        let project = TestProject::new();
        let formatter = OutputFormatter::new(false, true);
        handle_logout(Some(project.root_path_str()), &formatter).unwrap();
    }

    #[test]
    fn test_whoami_without_project_fails() {
        let dir = TempDir::new().unwrap();
        let formatter = OutputFormatter::new(false, true);
        let result = handle_whoami(dir.path().to_str(), &formatter);
        assert!(result.is_err());
    }
}

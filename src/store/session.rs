//! Session store
//!
//! Holds the client-side record of whether a user is considered logged
//! in: a single opaque token, persisted in a fixed-name file inside the
//! project data directory so it survives restarts. The token is never
//! verified against any authority; a present slot is trusted as-is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TicketAppError};

/// File name of the persisted session slot
pub const SESSION_FILE: &str = "ticketapp_session";

/// A logged-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// The opaque token this session was created with
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// File-backed single-slot session store
///
/// Reads the persisted slot once at construction; `login` and `logout`
/// keep the file and the in-memory value in sync. There is exactly one
/// slot, so the store is a singleton per data directory.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<Session>,
}

impl SessionStore {
    /// Open the session store for a data directory
    ///
    /// If the slot file exists, its content is treated as a valid
    /// logged-in session with no re-verification.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let path = data_dir.as_ref().join(SESSION_FILE);
        let user = match fs::read_to_string(&path) {
            Ok(content) => {
                let token = content.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    tracing::debug!("restored persisted session");
                    Some(Session { token })
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, user })
    }

    /// Store a token, marking the user as logged in
    ///
    /// The token content is opaque and unchecked, except that it must
    /// be non-empty so an authenticated session always carries one.
    pub fn login(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TicketAppError::EmptyToken);
        }
        fs::write(&self.path, token)?;
        self.user = Some(Session {
            token: token.to_string(),
        });
        Ok(())
    }

    /// Clear the session; idempotent
    pub fn logout(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
            Err(e) => return Err(e.into()),
        }
        self.user = None;
        Ok(())
    }

    /// The current session, if logged in
    #[must_use]
    pub fn current_user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    /// Whether a user is currently considered logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_login_then_current_user() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::open(dir.path()).unwrap();

        assert!(store.current_user().is_none());
        store.login("abc").unwrap();
        assert_eq!(store.current_user().unwrap().token(), "abc");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::open(dir.path()).unwrap();

        store.login("abc").unwrap();
        store.logout().unwrap();
        assert!(store.current_user().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::open(dir.path()).unwrap();

        store.logout().unwrap();
        store.logout().unwrap();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = TempDir::new().unwrap();

        let mut store = SessionStore::open(dir.path()).unwrap();
        store.login("abc").unwrap();
        drop(store);

        // Simulated restart: a fresh store over the same directory
        let reopened = SessionStore::open(dir.path()).unwrap();
        assert_eq!(reopened.current_user().unwrap().token(), "abc");
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::open(dir.path()).unwrap();

        assert!(matches!(store.login(""), Err(TicketAppError::EmptyToken)));
        assert!(matches!(store.login("   "), Err(TicketAppError::EmptyToken)));
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_fabricated_slot_is_trusted() {
        // Anyone can write the slot file directly; the store treats it
        // as a valid session. This mirrors the contract it implements.
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "forged-token\n").unwrap();

        let store = SessionStore::open(dir.path()).unwrap();
        assert_eq!(store.current_user().unwrap().token(), "forged-token");
    }
}

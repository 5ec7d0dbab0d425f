//! Error types for ticketapp
//!
//! All fallible operations in the crate return [`Result`], which wraps
//! [`TicketAppError`]. The CLI layer renders errors through
//! `user_message` and `suggestions` rather than the raw `Display` output.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketAppError>;

/// All errors that can occur in ticketapp
#[derive(Debug, Error)]
pub enum TicketAppError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Project has not been initialized
    #[error("Project is not initialized. Run `ticketapp init` first")]
    ProjectNotInitialized,

    /// Project is already initialized
    #[error("Project is already initialized at `{path}`")]
    AlreadyInitialized { path: String },

    /// Ticket with the given ID was not found
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A freshly generated ticket ID collided with an existing one
    #[error("Duplicate ticket ID: {id}")]
    DuplicateTicketId { id: String },

    /// A form field failed validation
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login was attempted with an empty token
    #[error("Session token must not be empty")]
    EmptyToken,

    /// An operation required a logged-in session
    #[error("Not logged in")]
    NotLoggedIn,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// YAML serialization/deserialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Custom error with a message
    #[error("{0}")]
    Custom(String),
}

impl TicketAppError {
    /// Create a custom error from any displayable message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create a validation error for a named form field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// User-facing message for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ProjectNotInitialized => {
                "No ticketapp project found in this directory".to_string()
            },
            Self::NotLoggedIn => "You need to log in before managing tickets".to_string(),
            Self::TicketNotFound { id } => format!("No ticket exists with ID `{id}`"),
            other => other.to_string(),
        }
    }

    /// Suggestions for resolving this error, if any
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectNotInitialized => vec![
                "Run `ticketapp init` to initialize a project here".to_string(),
                "Use `--project <dir>` to point at an existing project".to_string(),
            ],
            Self::AlreadyInitialized { .. } => {
                vec!["Use `--force` to reinitialize the project".to_string()]
            },
            Self::NotLoggedIn => vec!["Run `ticketapp login <token>` first".to_string()],
            Self::TicketNotFound { .. } => {
                vec!["List tickets to see the available IDs".to_string()]
            },
            Self::EmptyToken => vec!["Provide a non-empty session token".to_string()],
            Self::Validation { .. } => {
                vec!["Titles need at least 3 characters, descriptions at least 10".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the user can recover from this error by changing their input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Config(_) | Self::Yaml(_) | Self::Json(_))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TicketAppError;

/// Unique identifier for a ticket
///
/// Backed by a UUID v4 so freshly drawn IDs are collision-resistant;
/// the store still checks uniqueness at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ticket ID from an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a ticket ID from its string form
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket status
///
/// A free enum with no transition restrictions; any status may be set
/// to any other at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl Status {
    /// All statuses, in display order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Human-readable label (underscores replaced with spaces)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = TicketAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in_progress" | "in-progress" | "in progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(TicketAppError::InvalidInput(format!(
                "Invalid status: '{other}'. Use 'open', 'in_progress', or 'closed'"
            ))),
        }
    }
}

/// A support-request record
///
/// `id` and `created_at` are assigned by the store at creation and are
/// never changed by updates. The serialized form uses camelCase field
/// names (`createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a new ticket with a fresh ID and the current timestamp
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, status: Status) -> Self {
        Self {
            id: TicketId::new(),
            title: title.into(),
            description: description.into(),
            status,
            created_at: Utc::now(),
        }
    }

    /// Apply a patch, overwriting only the fields the patch supplies
    ///
    /// `id` and `created_at` are preserved.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Fields supplied when creating a ticket
///
/// The store assigns `id` and `created_at` itself and performs no
/// validation on these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl TicketDraft {
    /// Create a draft with the given title and description, status open
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: Status::Open,
        }
    }

    /// Set the status
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Partial update for a ticket; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl TicketPatch {
    /// Create an empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("open".parse::<Status>().unwrap(), Status::Open);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("CLOSED".parse::<Status>().unwrap(), Status::Closed);
        assert!("resolved".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_ticket_serde_uses_camel_case() {
        let ticket = Ticket::new("Server Down", "Production server is down", Status::Open);
        let json = serde_json::to_value(&ticket).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_apply_patch_preserves_unset_fields() {
        let mut ticket = Ticket::new("Title", "Description text", Status::Open);
        let original_id = ticket.id.clone();
        let original_created = ticket.created_at;

        ticket.apply(TicketPatch::new().status(Status::Closed));

        assert_eq!(ticket.id, original_id);
        assert_eq!(ticket.created_at, original_created);
        assert_eq!(ticket.title, "Title");
        assert_eq!(ticket.description, "Description text");
        assert_eq!(ticket.status, Status::Closed);
    }

    #[test]
    fn test_ticket_id_roundtrip() {
        let id = TicketId::new();
        let parsed = TicketId::parse_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TicketPatch::new().is_empty());
        assert!(!TicketPatch::new().title("x").is_empty());
    }
}

//! Form-level validation for ticket input
//!
//! Validation lives here, at the CLI form layer, not in the store:
//! the store accepts whatever it is given, exactly as the UI/store
//! split prescribes. These rules match the original form schema.

use crate::core::{Status, TicketDraft, TicketPatch};
use crate::error::{Result, TicketAppError};

/// Minimum title length in characters
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum description length in characters
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Validate a ticket title
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(TicketAppError::validation(
            "title",
            format!("must be at least {MIN_TITLE_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a ticket description
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        return Err(TicketAppError::validation(
            "description",
            format!("must be at least {MIN_DESCRIPTION_LEN} characters"),
        ));
    }
    Ok(())
}

/// Parse and validate a status string
pub fn parse_status(status: &str) -> Result<Status> {
    status.parse()
}

/// Validate a complete draft before it reaches the store
pub fn validate_draft(draft: &TicketDraft) -> Result<()> {
    validate_title(&draft.title)?;
    validate_description(&draft.description)?;
    Ok(())
}

/// Validate the fields a patch supplies; absent fields are fine
pub fn validate_patch(patch: &TicketPatch) -> Result<()> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description)?;
    }
    Ok(())
}

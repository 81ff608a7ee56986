//! Form intake: turns a submitted form into a log entry.

use chrono::NaiveDateTime;
use shared::timestamp::{format_timestamp, now_local};
use shared::validation::trimmed_or_empty;
use validator::{Validate, ValidationErrors};

use crate::models::{LogEntry, SubmitEntryRequest};

/// Validates a submission and stamps it with the current server time.
pub fn submit(request: &SubmitEntryRequest) -> Result<LogEntry, ValidationErrors> {
    submit_at(request, now_local())
}

/// Same as [`submit`] with an explicit timestamp.
pub fn submit_at(
    request: &SubmitEntryRequest,
    at: NaiveDateTime,
) -> Result<LogEntry, ValidationErrors> {
    request.validate()?;

    Ok(LogEntry {
        timestamp: format_timestamp(at),
        person_name: request.person_name.trim().to_string(),
        person_id: trimmed_or_empty(request.person_id.as_deref()),
        action: request.action.as_label().to_string(),
        item_name: request.item_name.trim().to_string(),
        quantity: request.quantity,
        note: trimmed_or_empty(request.note.as_deref()),
    })
}

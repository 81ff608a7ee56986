//! Borrow/return entry handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{LogEntry, SubmitEntryRequest};
use domain::services::{search, submit};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{warnings, Warning};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_entry_submitted;

/// Query parameters for history search.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Substring of the borrower's name, case-insensitive
    pub name: Option<String>,
    /// Substring of the note, case-insensitive
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntryResponse {
    pub entry: LogEntry,
    /// Entries in the log after the append
    pub total_entries: usize,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResponse {
    pub entries: Vec<LogEntry>,
    pub total: usize,
    pub warnings: Vec<Warning>,
}

/// Record one borrow or return.
///
/// POST /api/v1/entries
///
/// Nothing is written unless the submission validates. After the append the
/// log is read back so the caller sees the state including its own entry.
pub async fn submit_entry(
    State(state): State<AppState>,
    payload: Result<Json<SubmitEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitEntryResponse>), ApiError> {
    let Json(request) = payload?;
    let entry = submit(&request)?;

    state.accessor.append(&entry).await?;
    record_entry_submitted(&entry.action, entry.quantity);

    let loaded = state.accessor.load().await?;

    info!(
        person_name = %entry.person_name,
        action = %entry.action,
        item_name = %entry.item_name,
        quantity = entry.quantity,
        "Entry recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitEntryResponse {
            entry,
            total_entries: loaded.entries.len(),
            warnings: warnings(loaded.diagnostics),
        }),
    ))
}

/// Search the history by name and/or note.
///
/// GET /api/v1/entries?name=&note=
pub async fn list_entries(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let Query(query) = query?;
    let loaded = state.accessor.load().await?;

    let entries = search(
        &loaded.entries,
        query.name.as_deref(),
        query.note.as_deref(),
    );

    Ok(Json(ListEntriesResponse {
        total: entries.len(),
        entries,
        warnings: warnings(loaded.diagnostics),
    }))
}

//! Report handlers. Every report is recomputed from a fresh read of the log.

use axum::{extract::State, Json};
use domain::models::{ItemOutstanding, PersonItemBalance};
use domain::services::{outstanding_by_item, unreturned as unreturned_balances};
use serde::Serialize;

use super::{warnings, Warning};
use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreturnedResponse {
    pub balances: Vec<PersonItemBalance>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingResponse {
    pub items: Vec<ItemOutstanding>,
    pub nothing_outstanding: bool,
    pub total: i64,
    pub warnings: Vec<Warning>,
}

/// Items each person still holds.
///
/// GET /api/v1/reports/unreturned
pub async fn unreturned(
    State(state): State<AppState>,
) -> Result<Json<UnreturnedResponse>, ApiError> {
    let loaded = state.accessor.load().await?;
    let balances = unreturned_balances(&loaded.entries);

    tracing::debug!(
        entries = loaded.entries.len(),
        balances = balances.len(),
        "Computed unreturned report"
    );

    Ok(Json(UnreturnedResponse {
        balances,
        warnings: warnings(loaded.diagnostics),
    }))
}

/// Quantity of each item currently out, largest first.
///
/// GET /api/v1/reports/outstanding
pub async fn outstanding(
    State(state): State<AppState>,
) -> Result<Json<OutstandingResponse>, ApiError> {
    let loaded = state.accessor.load().await?;
    let report = outstanding_by_item(&unreturned_balances(&loaded.entries));

    Ok(Json(OutstandingResponse {
        total: report.total(),
        nothing_outstanding: report.nothing_outstanding,
        items: report.items,
        warnings: warnings(loaded.diagnostics),
    }))
}

//! Typed access to the event log.
//!
//! Loading never fails on content. Header drift is reported as a
//! [`Diagnostic`], missing columns read as empty cells, and quantities that do
//! not parse read as 0. Only store failures are errors.

use std::collections::HashMap;
use std::sync::Arc;

use domain::models::log_entry::{
    COL_ACTION, COL_ITEM_NAME, COL_NOTE, COL_PERSON_ID, COL_PERSON_NAME, COL_QUANTITY,
    COL_TIMESTAMP,
};
use domain::models::{Diagnostic, LogEntry, COLUMNS};

use crate::metrics::{record_coercion_fallback, StoreTimer};
use crate::store::{EventLogStore, StoreError};

/// Entries read from the log plus anything worth warning about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedLog {
    pub entries: Vec<LogEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads and appends log entries through an [`EventLogStore`].
#[derive(Clone)]
pub struct LogAccessor {
    store: Arc<dyn EventLogStore>,
}

impl LogAccessor {
    pub fn new(store: Arc<dyn EventLogStore>) -> Self {
        Self { store }
    }

    /// Loads the whole log.
    ///
    /// An empty store gets the header row written so later appends land under
    /// the right headings, and an empty log is returned.
    pub async fn load(&self) -> Result<LoadedLog, StoreError> {
        let rows = self.read_with_header().await?;
        if rows.is_empty() {
            return Ok(LoadedLog::default());
        }

        let loaded = normalize(&rows);
        for diagnostic in &loaded.diagnostics {
            tracing::warn!(diagnostic = %diagnostic, "Event log header mismatch");
        }
        tracing::debug!(entries = loaded.entries.len(), "Loaded event log");
        Ok(loaded)
    }

    /// Appends one entry in canonical column order, writing the header row
    /// first if the store is empty.
    pub async fn append(&self, entry: &LogEntry) -> Result<(), StoreError> {
        self.read_with_header().await?;
        self.append_raw(entry.to_row()).await?;
        tracing::info!(
            person_name = %entry.person_name,
            action = %entry.action,
            item_name = %entry.item_name,
            quantity = entry.quantity,
            "Appended log entry"
        );
        Ok(())
    }

    /// Checks the store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    /// Reads every row. An empty store gets the header row and reads as empty.
    async fn read_with_header(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let timer = StoreTimer::new("get_all_rows");
        let result = self.store.get_all_rows().await;
        timer.record(result.is_ok());
        let rows = result?;

        if rows.is_empty() {
            tracing::info!("Event log is empty, writing header row");
            self.append_raw(COLUMNS.iter().map(|c| c.to_string()).collect())
                .await?;
        }
        Ok(rows)
    }

    async fn append_raw(&self, row: Vec<String>) -> Result<(), StoreError> {
        let timer = StoreTimer::new("append_row");
        let result = self.store.append_row(row).await;
        timer.record(result.is_ok());
        result
    }
}

/// Turns raw rows (header first) into entries.
pub fn normalize(rows: &[Vec<String>]) -> LoadedLog {
    let Some((header, data)) = rows.split_first() else {
        return LoadedLog::default();
    };

    let mut diagnostics = Vec::new();
    if !header_matches(header) {
        let missing = COLUMNS
            .iter()
            .filter(|c| !header.iter().any(|h| h.trim() == **c))
            .map(|c| c.to_string())
            .collect();
        diagnostics.push(Diagnostic::SchemaDrift {
            expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: header.clone(),
            missing,
        });
    }

    // First occurrence wins when a heading is duplicated.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (index, name) in header.iter().enumerate() {
        positions.entry(name.trim()).or_insert(index);
    }

    let entries = data
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            let cell = |column: &str| -> String {
                positions
                    .get(column)
                    .and_then(|&i| row.get(i))
                    .cloned()
                    .unwrap_or_default()
            };
            LogEntry {
                timestamp: cell(COL_TIMESTAMP),
                person_name: cell(COL_PERSON_NAME),
                person_id: cell(COL_PERSON_ID),
                action: cell(COL_ACTION),
                item_name: cell(COL_ITEM_NAME),
                quantity: coerce_quantity(&cell(COL_QUANTITY)),
                note: cell(COL_NOTE),
            }
        })
        .collect();

    LoadedLog {
        entries,
        diagnostics,
    }
}

/// Reads a quantity cell.
///
/// Integers parse directly, decimals truncate toward zero and saturate at the
/// `i64` bounds, and anything else is 0.
pub fn coerce_quantity(raw: &str) -> i64 {
    let text = raw.trim();
    if let Ok(value) = text.parse::<i64>() {
        return value;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => {
            tracing::debug!(raw = %raw, "Quantity is not numeric, using 0");
            record_coercion_fallback(COL_QUANTITY);
            0
        }
    }
}

/// Trailing empty headings are ignored; the Sheets API pads ragged rows.
fn header_matches(header: &[String]) -> bool {
    let trimmed: Vec<&str> = header.iter().map(|h| h.trim()).collect();
    let end = trimmed
        .iter()
        .rposition(|h| !h.is_empty())
        .map_or(0, |i| i + 1);
    trimmed[..end] == COLUMNS[..]
}

//! Event log store abstraction.
//!
//! The store is an ordered, append-only grid of string cells whose first row
//! is the header. Implementations:
//! - [`SheetsStore`]: a Google Sheets worksheet
//! - [`MemoryStore`]: an in-process grid for development and tests

pub mod memory;
pub mod sheets;

pub use memory::MemoryStore;
pub use sheets::{SheetsConfig, SheetsStore, WorksheetHandle};

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to parse credentials: {0}")]
    Credentials(String),

    #[error("Failed to get access token: {0}")]
    Token(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Raw access to the event log.
#[async_trait::async_trait]
pub trait EventLogStore: Send + Sync {
    /// Every row in sheet order, header included. Rows may be ragged.
    async fn get_all_rows(&self) -> Result<Vec<Vec<String>>, StoreError>;

    /// Appends one row after the last non-empty row.
    async fn append_row(&self, values: Vec<String>) -> Result<(), StoreError>;

    /// Resolves the underlying sheet, failing if it cannot be reached.
    async fn ping(&self) -> Result<(), StoreError>;
}

//! Domain models for the wardrobe ledger.

pub mod diagnostic;
pub mod log_entry;
pub mod report;

pub use diagnostic::Diagnostic;
pub use log_entry::{Action, LogEntry, SubmitEntryRequest, COLUMNS};
pub use report::{ItemOutstanding, OutstandingReport, PersonItemBalance};

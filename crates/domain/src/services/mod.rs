//! Domain services for the wardrobe ledger.
//!
//! Pure functions over already-loaded log entries; none of them fail on
//! well-typed input except intake validation.

pub mod history;
pub mod intake;
pub mod reconciliation;

pub use history::search;
pub use intake::{submit, submit_at};
pub use reconciliation::{outstanding_by_item, unreturned};

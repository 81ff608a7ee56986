//! Persistence layer for the wardrobe ledger.
//!
//! This crate contains:
//! - The event log store abstraction and its Google Sheets and in-memory
//!   implementations
//! - The log accessor that turns raw rows into typed entries
//! - Store call metrics

pub mod accessor;
pub mod metrics;
pub mod store;

pub use accessor::{LoadedLog, LogAccessor};
pub use store::{EventLogStore, MemoryStore, SheetsConfig, SheetsStore, StoreError};

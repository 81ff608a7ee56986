//! Domain layer for the wardrobe ledger.
//!
//! This crate contains:
//! - The event log model (LogEntry, Action) and derived report rows
//! - Reconciliation, history search and form intake services
//! - Diagnostics produced while reading the log

pub mod models;
pub mod services;

//! Shared utilities and common types for the wardrobe ledger.
//!
//! This crate provides common functionality used across all other crates:
//! - Service-account JWT assertions for Google APIs
//! - Common validation logic
//! - The log's timestamp format

pub mod jwt;
pub mod timestamp;
pub mod validation;

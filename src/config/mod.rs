//! Configuration module for the expense tracker
//!
//! Knows where the ledger file lives.

pub mod paths;

pub use paths::{TrackerPaths, DEFAULT_LEDGER_FILE};

//! Reports module for the expense tracker
//!
//! Provides the current-month spending summary.

pub mod monthly;

pub use monthly::{CategoryTotal, MonthlySummary};

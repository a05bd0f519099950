//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent recorded spending:
//! amounts, individual expenses, and the ledger that holds them.

pub mod amount;
pub mod expense;
pub mod ledger;

pub use amount::{Amount, AmountParseError};
pub use expense::{today, Expense};
pub use ledger::Ledger;

//! Expense Tracker - interactive personal expense logging
//!
//! Records spending entries (amount, description, category, date), keeps them
//! in a JSON file, and summarizes spending for the current calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger file location
//! - `error`: Custom error types
//! - `models`: Amounts, expenses and the ledger
//! - `storage`: JSON file storage layer
//! - `services`: Ledger operations
//! - `reports`: Monthly summary
//! - `display`: Terminal text formatting
//! - `shell`: Interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::Amount;
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.json".into());
//! let service = LedgerService::new(&store);
//! let mut ledger = service.load()?;
//! service.add_expense(&mut ledger, Amount::new(12.5), "coffee", "food")?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{TrackerError, TrackerResult};

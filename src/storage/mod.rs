//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes. All reads and writes of the
//! ledger file go through [`ExpenseStore`].

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json_or_default, write_json_atomic};

//! Expense store for JSON storage
//!
//! Loads the ledger from its JSON file at startup and rewrites the whole file
//! after every change.

use std::path::{Path, PathBuf};

use crate::error::TrackerResult;
use crate::models::Ledger;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Durable home of the ledger
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given JSON file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger; a missing file is an empty ledger
    pub fn load(&self) -> TrackerResult<Ledger> {
        read_json_or_default(&self.path)
    }

    /// Replace the stored ledger with `ledger`
    pub fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        write_json_atomic(&self.path, ledger)
    }
}

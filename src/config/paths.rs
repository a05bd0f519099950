//! Path management for the expense tracker
//!
//! The ledger always lives in `expenses.json` in the current working
//! directory. There are no overrides and no environment variables are
//! consulted.

use std::path::{Path, PathBuf};

/// Ledger file name, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPaths {
    ledger_file: PathBuf,
}

impl TrackerPaths {
    /// Paths relative to the current working directory
    pub fn in_working_dir() -> Self {
        Self {
            ledger_file: PathBuf::from(DEFAULT_LEDGER_FILE),
        }
    }

    /// Path to the ledger JSON file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_file_is_relative() {
        let paths = TrackerPaths::in_working_dir();
        assert_eq!(paths.ledger_file(), Path::new("expenses.json"));
        assert!(paths.ledger_file().is_relative());
    }
}

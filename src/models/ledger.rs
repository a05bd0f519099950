//! Ledger model
//!
//! The ordered collection of every recorded expense, oldest first. This is the
//! only persisted entity; on disk it is a top-level JSON array.

use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// All recorded expenses in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense at the end
    pub(crate) fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove and return the most recently appended expense
    pub(crate) fn pop(&mut self) -> Option<Expense> {
        self.expenses.pop()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate expenses oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// The most recently recorded expense
    pub fn last(&self) -> Option<&Expense> {
        self.expenses.last()
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

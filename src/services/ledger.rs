//! Ledger service
//!
//! Business logic for recording expenses and querying the ledger. The ledger
//! itself is owned by the caller and passed in; the service only borrows the
//! store so every addition is persisted before it is reported back.

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{Amount, Expense, Ledger};
use crate::reports::MonthlySummary;
use crate::storage::ExpenseStore;

/// Service for ledger operations
pub struct LedgerService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Load the ledger from the store
    pub fn load(&self) -> TrackerResult<Ledger> {
        self.store.load()
    }

    /// Record a new expense dated today and persist the ledger
    ///
    /// Returns `Ok` exactly when the write succeeded. If the ledger cannot be
    /// written the expense is removed again, so the in-memory ledger never
    /// holds an entry the file doesn't.
    pub fn add_expense(
        &self,
        ledger: &mut Ledger,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> TrackerResult<Expense> {
        let expense = Expense::new(amount, description, category);
        ledger.push(expense.clone());

        if let Err(e) = self.store.save(ledger) {
            ledger.pop();
            return Err(e);
        }

        Ok(expense)
    }

    /// All expenses, oldest first
    pub fn list_expenses<'l>(&self, ledger: &'l Ledger) -> &'l [Expense] {
        ledger.as_slice()
    }

    /// Spending summary for the month containing `reference`
    pub fn monthly_summary(&self, ledger: &Ledger, reference: NaiveDate) -> MonthlySummary {
        MonthlySummary::generate(ledger, reference)
    }
}

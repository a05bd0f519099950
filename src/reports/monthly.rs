//! Monthly Summary
//!
//! Totals spending for one calendar month, overall and per category.

use chrono::{Datelike, NaiveDate};

use crate::models::{Amount, Ledger};

/// Spending for one category within the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name, exactly as recorded
    pub category: String,
    /// Sum of amounts in this category
    pub total: Amount,
}

/// Monthly Summary
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Year of the summarized month
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
    /// Sum of every expense in the month
    pub total: Amount,
    /// Per-category totals, in order of first appearance in the ledger
    pub categories: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Summarize the month containing `reference`
    ///
    /// Expenses dated in any other month (including the same month of another
    /// year) are ignored.
    pub fn generate(ledger: &Ledger, reference: NaiveDate) -> Self {
        let mut total = Amount::zero();
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for expense in ledger.iter().filter(|e| e.is_in_month_of(reference)) {
            total += expense.amount;

            match categories
                .iter_mut()
                .find(|c| c.category == expense.category)
            {
                Some(entry) => entry.total += expense.amount,
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        Self {
            year: reference.year(),
            month: reference.month(),
            total,
            categories,
        }
    }

    /// "October 2026"
    pub fn month_label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month))
    }
}

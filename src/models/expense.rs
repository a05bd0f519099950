//! Expense model
//!
//! A single spending event. The date is stamped when the record is created
//! and never changes afterwards.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expense {
    /// How much was spent
    pub amount: Amount,

    /// Free-text description (may be empty)
    pub description: String,

    /// Aggregation key for summaries; case-sensitive
    pub category: String,

    /// Day the expense was recorded (serialized as YYYY-MM-DD)
    date: NaiveDate,
}

impl Expense {
    /// Create a new expense dated today (local time)
    pub fn new(amount: Amount, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date: today(),
        }
    }

    /// Create an expense with an explicit date
    #[cfg(test)]
    pub(crate) fn on(
        date: NaiveDate,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// The day this expense was recorded
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Check whether the expense falls in the same calendar month as `reference`
    pub fn is_in_month_of(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

//! Expense display formatting
//!
//! Text for the expense list and the monthly summary as shown by the shell.

use crate::models::Expense;
use crate::reports::MonthlySummary;

/// Format a single listed expense (1-based index)
pub fn format_expense_row(index: usize, expense: &Expense) -> String {
    format!(
        "{}. {} - {} ({}): ${}",
        index,
        expense.date().format("%Y-%m-%d"),
        expense.description,
        expense.category,
        expense.amount
    )
}

/// Format every expense, or a notice when there are none
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::from("\nRecorded Expenses:\n");
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense));
        output.push('\n');
    }

    output
}

/// Format the monthly summary: total line, then one line per category
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    let mut output = format!(
        "\nTotal expenses for {}: ${}\n",
        summary.month_label(),
        summary.total.format_fixed()
    );

    for category in &summary.categories {
        output.push_str(&format!(
            "{}: ${}\n",
            category.category,
            category.total.format_fixed()
        ));
    }

    output
}

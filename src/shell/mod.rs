//! Interactive menu shell
//!
//! A blocking read/print loop over any line reader and writer. The binary
//! runs it on stdin/stdout; tests drive it with in-memory buffers.
//!
//! The shell owns the in-memory ledger for the whole session and hands it to
//! the [`LedgerService`] by reference for each operation.

use std::io::{BufRead, Write};

use crate::display::{format_expense_list, format_monthly_summary};
use crate::error::TrackerResult;
use crate::models::{today, Amount, Ledger};
use crate::services::LedgerService;

pub const MENU_HEADER: &str = "Expense Tracker Menu:";
pub const MENU_PROMPT: &str = "Select an option (1-4): ";
pub const AMOUNT_PROMPT: &str = "Enter amount: ";
pub const DESCRIPTION_PROMPT: &str = "Enter description: ";
pub const CATEGORY_PROMPT: &str = "Enter category: ";
pub const ADDED_MESSAGE: &str = "Expense added successfully.";
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid input! Please enter a valid amount.";
pub const INVALID_OPTION_MESSAGE: &str = "Invalid option! Please select a valid choice.";
pub const GOODBYE_MESSAGE: &str = "Exiting the Expense Tracker. Goodbye!";

const MENU_ITEMS: [&str; 4] = [
    "1. Add Expense",
    "2. View Expenses",
    "3. Monthly Summary",
    "4. Exit",
];

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    MonthlySummary,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::MonthlySummary),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The interactive expense tracker session
pub struct Shell<'a, R, W> {
    service: LedgerService<'a>,
    ledger: Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over an already loaded ledger
    pub fn new(service: LedgerService<'a>, ledger: Ledger, input: R, output: W) -> Self {
        Self {
            service,
            ledger,
            input,
            output,
        }
    }

    /// Consume the shell, returning the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Storage failures are returned immediately; the session cannot continue
    /// with a ledger that is out of sync with its file.
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt(MENU_PROMPT)? else {
                self.output.flush()?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::AddExpense) => self.add_expense()?,
                Some(MenuChoice::ViewExpenses) => self.view_expenses()?,
                Some(MenuChoice::MonthlySummary) => self.monthly_summary()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", GOODBYE_MESSAGE)?;
                    Flow::Stop
                }
                None => {
                    writeln!(self.output, "{}", INVALID_OPTION_MESSAGE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU_HEADER)?;
        for item in MENU_ITEMS {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> TrackerResult<Flow> {
        let Some(raw_amount) = self.prompt(AMOUNT_PROMPT)? else {
            return Ok(Flow::Stop);
        };

        let amount = match Amount::parse(&raw_amount) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "{}", INVALID_AMOUNT_MESSAGE)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(description) = self.prompt(DESCRIPTION_PROMPT)? else {
            return Ok(Flow::Stop);
        };
        let Some(category) = self.prompt(CATEGORY_PROMPT)? else {
            return Ok(Flow::Stop);
        };

        self.service
            .add_expense(&mut self.ledger, amount, description, category)?;
        writeln!(self.output, "{}", ADDED_MESSAGE)?;

        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> TrackerResult<Flow> {
        let expenses = self.service.list_expenses(&self.ledger);
        write!(self.output, "{}", format_expense_list(expenses))?;
        Ok(Flow::Continue)
    }

    fn monthly_summary(&mut self) -> TrackerResult<Flow> {
        let summary = self.service.monthly_summary(&self.ledger, today());
        write!(self.output, "{}", format_monthly_summary(&summary))?;
        Ok(Flow::Continue)
    }

    /// Print `prompt` and read one line; `None` once input is exhausted
    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

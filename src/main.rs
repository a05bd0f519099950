use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use expense_tracker::config::TrackerPaths;
use expense_tracker::services::LedgerService;
use expense_tracker::shell::Shell;
use expense_tracker::storage::ExpenseStore;

/// Takes no options; clap only supplies `--help` and `--version`
#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive personal expense tracker",
    long_about = "Record expenses with an amount, description and category, \
                  list everything recorded so far, and see a per-category \
                  summary of the current month. Expenses are kept in \
                  expenses.json in the current directory."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let paths = TrackerPaths::in_working_dir();
    let store = ExpenseStore::new(paths.ledger_file().to_path_buf());

    let service = LedgerService::new(&store);
    let ledger = service
        .load()
        .with_context(|| format!("failed to load expenses from {}", store.path().display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(service, ledger, stdin.lock(), stdout.lock());
    shell.run().context("expense tracker session aborted")?;

    Ok(())
}

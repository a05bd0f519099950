//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer.

pub mod ledger;

pub use ledger::LedgerService;

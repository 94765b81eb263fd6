//! Core business logic module
//!
//! - `processor` - Ordered, fail-fast application of transfers to accounts

pub mod processor;

pub use processor::{apply_transactions_to_accounts, TransactionProcessor};

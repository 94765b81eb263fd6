//! Simple Banking Service Library
//! # Overview
//!
//! This library applies a batch of account-to-account transfers to a set of
//! account balances and produces the updated balances. Both inputs and the
//! output are headerless CSV files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountNumber, Account, Transaction, BankingError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - The transaction processor
//! - [`io`] - CSV readers, record validation and output
//! - [`strategy`] - Sync and async pipelines wiring load → process → write
//! - [`logging`] - tracing subscriber setup
//!
//! # Processing Rules
//!
//! - Transactions are applied strictly in file order
//! - No account balance may go negative, even temporarily
//! - The first invalid record or failing transaction aborts the whole batch,
//!   and no output is written

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use crate::core::{apply_transactions_to_accounts, TransactionProcessor};
pub use io::write_accounts_csv;
pub use types::{Account, AccountNumber, Accounts, BankingError, Transaction};

//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account_number`: Validated 16-digit account identifier
//! - `account`: Account entity and the keyed accounts table
//! - `transaction`: Transfer instructions
//! - `error`: Error types for the banking service

pub mod account;
pub mod account_number;
pub mod error;
pub mod transaction;

pub use account::{Account, Accounts};
pub use account_number::AccountNumber;
pub use error::BankingError;
pub use transaction::Transaction;

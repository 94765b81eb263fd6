//! Error types for the banking service
//!
//! This module defines all error types that can occur while loading balances,
//! loading transactions and applying them. Errors are descriptive so they can be
//! printed as-is by the CLI.
//!
//! # Error Categories
//!
//! - **Range violations**: negative account numbers, balances or amounts passed to a constructor
//! - **Data-format errors**: record-level validation failures, carrying the 1-based line
//! - **Value-conversion errors**: a balance or amount literal that is not a decimal at all
//! - **Processing errors**: insufficient balance, arithmetic overflow, missing account
//! - **File I/O and CSV errors**: missing files, unreadable files, malformed CSV structure
//!
//! None of these are retried. Every error aborts the whole batch.

use super::account_number::AccountNumber;
use rust_decimal::Decimal;
use std::fmt::Display;
use thiserror::Error;

/// Main error type for the banking service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Structural CSV error (wrong field count, invalid UTF-8, ...)
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A constructor was given a negative value
    ///
    /// Raised by [`AccountNumber::new`], `Account::new` and `Transaction::new`.
    #[error("{what} cannot be negative: {value}")]
    OutOfRange {
        /// What was out of range ("account number", "account balance", ...)
        what: &'static str,
        /// The rejected value, as text
        value: String,
    },

    /// A record failed validation
    ///
    /// The first invalid record aborts parsing of the whole file.
    #[error("On line {line}: {message}")]
    InvalidData {
        /// 1-based record number within the file
        line: u64,
        /// Description of the rule that was broken
        message: String,
    },

    /// A balance or amount field could not be converted to a decimal
    #[error("On line {line}: Cannot convert {field} to decimal: '{value}'")]
    ValueConversion {
        /// 1-based record number within the file
        line: u64,
        /// Record field name, e.g. `TransactionRecord.Amount`
        field: &'static str,
        /// The raw text that failed to convert
        value: String,
    },

    /// The debit would leave the account with a negative balance
    #[error("ApplyToBalance: account {account} has insufficient balance to subtract {requested}: current balance {balance}")]
    InsufficientBalance {
        /// Account being debited
        account: AccountNumber,
        /// Magnitude of the requested debit
        requested: Decimal,
        /// Balance at the time of the request
        balance: Decimal,
    },

    /// Adding to the balance would exceed the range of the decimal type
    #[error("Arithmetic overflow applying {amount} to account {account} with balance {balance}")]
    ArithmeticOverflow {
        /// Account being updated
        account: AccountNumber,
        /// Amount that was being applied
        amount: Decimal,
        /// Balance at the time of the request
        balance: Decimal,
    },

    /// A transaction references an account missing from the accounts table
    ///
    /// The parsers reject unknown accounts, so this only happens when the
    /// processor is handed unvalidated transactions.
    #[error("The given key '{account}' was not present in the accounts table")]
    AccountNotFound {
        /// The missing account number
        account: AccountNumber,
    },
}

// Conversion from io::Error to BankingError
impl From<std::io::Error> for BankingError {
    fn from(error: std::io::Error) -> Self {
        BankingError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankingError
impl From<csv::Error> for BankingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for BankingError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankingError {
    /// Map a file-open failure, keeping "not found" as its own kind
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            BankingError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            BankingError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(what: &'static str, value: impl Display) -> Self {
        BankingError::OutOfRange {
            what,
            value: value.to_string(),
        }
    }

    /// Create an InvalidData error
    pub fn invalid_data(line: u64, message: impl Into<String>) -> Self {
        BankingError::InvalidData {
            line,
            message: message.into(),
        }
    }

    /// Create a ValueConversion error
    pub fn value_conversion(line: u64, field: &'static str, value: &str) -> Self {
        BankingError::ValueConversion {
            line,
            field,
            value: value.to_string(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(
        account: AccountNumber,
        requested: Decimal,
        balance: Decimal,
    ) -> Self {
        BankingError::InsufficientBalance {
            account,
            requested,
            balance,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(account: AccountNumber, amount: Decimal, balance: Decimal) -> Self {
        BankingError::ArithmeticOverflow {
            account,
            amount,
            balance,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankingError::AccountNotFound { account }
    }
}

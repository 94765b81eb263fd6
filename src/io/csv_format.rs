//! CSV format handling for input readers and account output
//!
//! This module centralizes the CSV dialect shared by every reader and the writer:
//! - No header row
//! - Fields trimmed of surrounding whitespace
//! - `\n` line terminator on output
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Account, Accounts, BankingError};
use std::io::Write;

/// CSV reader configuration for balance and transaction files
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .trim(csv::Trim::All)
        .buffer_capacity(8 * 1024);
    builder
}

/// Async counterpart of [`reader_builder`]
pub fn async_reader_builder() -> csv_async::AsyncReaderBuilder {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.has_headers(false).trim(csv_async::Trim::All);
    builder
}

/// Write account balances in CSV format
///
/// Writes one `account_number,balance` row per account, with no header. Account
/// numbers use their 16-digit canonical form and balances keep their natural
/// scale. Rows are sorted by account number for deterministic output.
///
/// # Arguments
///
/// * `accounts` - The accounts table to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(BankingError)` if a write error occurred
pub fn write_accounts_csv(accounts: &Accounts, output: &mut dyn Write) -> Result<(), BankingError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    let mut sorted_accounts: Vec<&Account> = accounts.values().collect();
    sorted_accounts.sort_by_key(|account| account.number());

    for account in sorted_accounts {
        writer.write_record(&[account.number().to_string(), account.balance().to_string()])?;
    }

    writer.flush()?;

    Ok(())
}

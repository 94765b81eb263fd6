//! Account balance parser
//!
//! Turns raw account balance records into a validated [`Accounts`] table.
//! Validation stops at the first invalid record; errors carry the 1-based
//! record number.
//!
//! Rules, checked in order for each record:
//! 1. The balance text must be a decimal literal (value-conversion error)
//! 2. The account number must parse as an [`AccountNumber`]
//! 3. The balance must not be negative
//! 4. The account number must not already be present in the file

use crate::io::async_reader::AsyncReader;
use crate::io::records::AccountBalanceRecord;
use crate::io::sync_reader::SyncReader;
use crate::types::{Account, AccountNumber, Accounts, BankingError};
use futures::io::AsyncRead;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;

/// Accumulates validated accounts, one record at a time
#[derive(Debug, Default)]
pub struct AccountsParser {
    accounts: Accounts,
}

impl AccountsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one record and add its account to the table
    ///
    /// # Arguments
    ///
    /// * `line` - 1-based record number, used in error messages
    /// * `record` - The raw record
    ///
    /// # Errors
    ///
    /// [`BankingError::ValueConversion`] for a malformed balance literal,
    /// [`BankingError::InvalidData`] for any other rule violation.
    pub fn push_record(
        &mut self,
        line: u64,
        record: &AccountBalanceRecord,
    ) -> Result<(), BankingError> {
        let balance = record.parse_balance(line)?;
        let account = validate_and_convert_record(record, balance, line)?;

        if self.accounts.contains_key(&account.number()) {
            return Err(BankingError::invalid_data(
                line,
                format!("Duplicate account number: {}", account.number()),
            ));
        }

        self.accounts.insert(account.number(), account);
        Ok(())
    }

    /// Finish parsing and return the accounts table
    pub fn finish(self) -> Accounts {
        self.accounts
    }
}

fn validate_and_convert_record(
    record: &AccountBalanceRecord,
    balance: Decimal,
    line: u64,
) -> Result<Account, BankingError> {
    let number = AccountNumber::try_parse(record.account_number.trim()).ok_or_else(|| {
        BankingError::invalid_data(
            line,
            format!(
                "Invalid AccountBalanceRecord.AccountNumber format: {}",
                record.account_number
            ),
        )
    })?;

    if balance < Decimal::ZERO {
        return Err(BankingError::invalid_data(
            line,
            format!("AccountBalanceRecord.Balance cannot be negative: {}", balance),
        ));
    }

    Account::new(number, balance)
}

/// Parse account balances from any CSV reader
pub fn parse_accounts<R: Read>(reader: R) -> Result<Accounts, BankingError> {
    collect_accounts(SyncReader::from_reader(reader))
}

/// Parse account balances from a CSV file
///
/// # Errors
///
/// [`BankingError::FileNotFound`] if the file does not exist, otherwise the
/// first parse or validation error.
pub fn parse_accounts_file(path: &Path) -> Result<Accounts, BankingError> {
    collect_accounts(SyncReader::open(path)?)
}

fn collect_accounts<I>(records: I) -> Result<Accounts, BankingError>
where
    I: Iterator<Item = Result<(u64, AccountBalanceRecord), BankingError>>,
{
    let mut parser = AccountsParser::new();
    for result in records {
        let (line, record) = result?;
        parser.push_record(line, &record)?;
    }
    Ok(parser.finish())
}

/// Parse account balances from an async reader, `batch_size` records at a time
pub async fn parse_accounts_async<R>(reader: R, batch_size: usize) -> Result<Accounts, BankingError>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut reader = AsyncReader::<R, AccountBalanceRecord>::new(reader);
    let mut parser = AccountsParser::new();

    loop {
        let batch = reader.read_batch(batch_size).await?;
        if batch.is_empty() {
            break;
        }
        for (line, record) in &batch {
            parser.push_record(*line, record)?;
        }
    }

    Ok(parser.finish())
}

//! Transaction parser
//!
//! Turns raw transaction records into an ordered list of validated
//! [`Transaction`]s, checked against the set of known account numbers.
//! Validation stops at the first invalid record.

use crate::io::async_reader::AsyncReader;
use crate::io::records::TransactionRecord;
use crate::io::sync_reader::SyncReader;
use crate::types::{AccountNumber, BankingError, Transaction};
use futures::io::AsyncRead;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Accumulates validated transactions in file order
#[derive(Debug)]
pub struct TransactionsParser<'a> {
    known_accounts: &'a HashSet<AccountNumber>,
    transactions: Vec<Transaction>,
}

impl<'a> TransactionsParser<'a> {
    /// Create a parser that validates against `known_accounts`
    pub fn new(known_accounts: &'a HashSet<AccountNumber>) -> Self {
        Self {
            known_accounts,
            transactions: Vec::new(),
        }
    }

    /// Validate one record and append its transaction
    ///
    /// Rules, in order:
    /// 1. Amount must be a decimal literal
    /// 2. From and to account numbers must parse
    /// 3. From and to must differ
    /// 4. Both accounts must be known
    /// 5. Amount must not be negative
    ///
    /// # Errors
    ///
    /// [`BankingError::ValueConversion`] for a malformed amount literal,
    /// [`BankingError::InvalidData`] for any other rule violation.
    pub fn push_record(&mut self, line: u64, record: &TransactionRecord) -> Result<(), BankingError> {
        let amount = record.parse_amount(line)?;
        let transaction = self.validate_and_convert(record, amount, line)?;
        self.transactions.push(transaction);
        Ok(())
    }

    /// Finish parsing and return the transactions in file order
    pub fn finish(self) -> Vec<Transaction> {
        self.transactions
    }

    fn validate_and_convert(
        &self,
        record: &TransactionRecord,
        amount: Decimal,
        line: u64,
    ) -> Result<Transaction, BankingError> {
        let invalid = |message: String| BankingError::invalid_data(line, message);

        let from_account = AccountNumber::try_parse(record.from_account.trim()).ok_or_else(|| {
            invalid(format!(
                "Invalid TransactionRecord.FromAccount format: {}",
                record.from_account
            ))
        })?;
        let to_account = AccountNumber::try_parse(record.to_account.trim()).ok_or_else(|| {
            invalid(format!(
                "Invalid TransactionRecord.ToAccount format: {}",
                record.to_account
            ))
        })?;

        if from_account == to_account {
            return Err(invalid(format!(
                "TransactionRecord.FromAccount and TransactionRecord.ToAccount cannot be the same account: {}",
                from_account
            )));
        }
        if !self.known_accounts.contains(&from_account) {
            return Err(invalid(format!(
                "Unknown TransactionRecord.FromAccount (account does not exist): {}",
                from_account
            )));
        }
        if !self.known_accounts.contains(&to_account) {
            return Err(invalid(format!(
                "Unknown TransactionRecord.ToAccount (account does not exist): {}",
                to_account
            )));
        }
        if amount < Decimal::ZERO {
            return Err(invalid(format!(
                "TransactionRecord.Amount cannot be negative: {}",
                amount
            )));
        }

        Transaction::new(from_account, to_account, amount)
    }
}

/// Parse transactions from any CSV reader
pub fn parse_transactions<R: Read>(
    known_accounts: &HashSet<AccountNumber>,
    reader: R,
) -> Result<Vec<Transaction>, BankingError> {
    collect_transactions(known_accounts, SyncReader::from_reader(reader))
}

/// Parse transactions from a CSV file
///
/// # Errors
///
/// [`BankingError::FileNotFound`] if the file does not exist, otherwise the
/// first parse or validation error.
pub fn parse_transactions_file(
    known_accounts: &HashSet<AccountNumber>,
    path: &Path,
) -> Result<Vec<Transaction>, BankingError> {
    collect_transactions(known_accounts, SyncReader::open(path)?)
}

fn collect_transactions<I>(
    known_accounts: &HashSet<AccountNumber>,
    records: I,
) -> Result<Vec<Transaction>, BankingError>
where
    I: Iterator<Item = Result<(u64, TransactionRecord), BankingError>>,
{
    let mut parser = TransactionsParser::new(known_accounts);
    for result in records {
        let (line, record) = result?;
        parser.push_record(line, &record)?;
    }
    Ok(parser.finish())
}

/// Parse transactions from an async reader, `batch_size` records at a time
pub async fn parse_transactions_async<R>(
    known_accounts: &HashSet<AccountNumber>,
    reader: R,
    batch_size: usize,
) -> Result<Vec<Transaction>, BankingError>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut reader = AsyncReader::<R, TransactionRecord>::new(reader);
    let mut parser = TransactionsParser::new(known_accounts);

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

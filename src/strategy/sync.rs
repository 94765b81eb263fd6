//! Synchronous processing strategy
//!
//! Reads both input files with the streaming `SyncReader` on the calling
//! thread. This is the default strategy.

use crate::io::{parse_accounts_file, parse_transactions_file};
use crate::strategy::ProcessingStrategy;
use crate::types::{AccountNumber, Accounts, BankingError, Transaction};
use std::collections::HashSet;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use simple_banking_service::strategy::{BatchFiles, ProcessingStrategy, SyncProcessingStrategy};
///
/// let files = BatchFiles {
///     account_balances: "account_balances.csv".into(),
///     transactions: "transactions.csv".into(),
///     output: "output.csv".into(),
/// };
///
/// SyncProcessingStrategy.process(&files).expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn load_accounts(&self, path: &Path) -> Result<Accounts, BankingError> {
        parse_accounts_file(path)
    }

    fn load_transactions(
        &self,
        path: &Path,
        known_accounts: &HashSet<AccountNumber>,
    ) -> Result<Vec<Transaction>, BankingError> {
        parse_transactions_file(known_accounts, path)
    }
}

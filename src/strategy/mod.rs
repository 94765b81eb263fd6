//! Processing strategy module for batch runs
//!
//! This module defines the Strategy pattern for the complete pipeline: load
//! balances, load transactions, apply them, write the new balances. Strategies
//! differ only in how the two input files are read (synchronously, or
//! asynchronously in batches). The processor and the writer are shared.

use crate::cli::StrategyType;
use crate::core::apply_transactions_to_accounts;
use crate::io::write_accounts_csv;
use crate::types::{AccountNumber, Accounts, BankingError, Transaction};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, ReaderConfig};
pub use sync::SyncProcessingStrategy;

/// Input and output files for one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFiles {
    /// CSV file of current account balances
    pub account_balances: PathBuf,
    /// CSV file of transactions to apply, in order
    pub transactions: PathBuf,
    /// CSV file the new balances are written to
    pub output: PathBuf,
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub accounts: usize,
    pub transactions: usize,
}

/// Processing strategy trait for complete batch runs
///
/// Implementors provide the two loading steps. The provided `process` method
/// wires them to the transaction processor and the writer.
pub trait ProcessingStrategy: Send + Sync {
    /// Load and validate the account balance file
    fn load_accounts(&self, path: &Path) -> Result<Accounts, BankingError>;

    /// Load and validate the transaction file against the known accounts
    fn load_transactions(
        &self,
        path: &Path,
        known_accounts: &HashSet<AccountNumber>,
    ) -> Result<Vec<Transaction>, BankingError>;

    /// Run the full batch
    ///
    /// 1. Loads account balances
    /// 2. Derives the set of known account numbers
    /// 3. Loads transactions, validated against that set
    /// 4. Applies every transaction in order
    /// 5. Writes the resulting balances
    ///
    /// # Errors
    ///
    /// Any failure aborts the run. The output file is only created once all
    /// transactions have been applied, so a failed run leaves no output behind.
    fn process(&self, files: &BatchFiles) -> Result<BatchSummary, BankingError> {
        info!(
            "Loading account balances from {}...",
            files.account_balances.display()
        );
        let mut accounts = self.load_accounts(&files.account_balances)?;
        log_accounts(&accounts);

        let known_accounts: HashSet<AccountNumber> = accounts.keys().copied().collect();

        info!("Loading transactions from {}...", files.transactions.display());
        let transactions = self.load_transactions(&files.transactions, &known_accounts)?;
        log_transactions(&transactions);

        let applied = apply_transactions_to_accounts(&mut accounts, &transactions)?;
        info!(applied, "Applied all transactions");

        info!(
            "Writing new account balances to {}...",
            files.output.display()
        );
        write_accounts_file(&accounts, &files.output)?;
        log_accounts(&accounts);

        Ok(BatchSummary {
            accounts: accounts.len(),
            transactions: applied,
        })
    }
}

/// Write the accounts table to a new CSV file at `path`
pub fn write_accounts_file(accounts: &Accounts, path: &Path) -> Result<(), BankingError> {
    let file = File::create(path).map_err(|e| BankingError::IoError {
        message: format!("Failed to create file '{}': {}", path.display(), e),
    })?;
    let mut writer = BufWriter::new(file);
    write_accounts_csv(accounts, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Sum of all balances, or `None` if the sum is not representable
pub fn total_balance(accounts: &Accounts) -> Option<Decimal> {
    accounts
        .values()
        .try_fold(Decimal::ZERO, |total, account| total.checked_add(account.balance()))
}

fn log_accounts(accounts: &Accounts) {
    info!(
        accounts = accounts.len(),
        total_balance = ?total_balance(accounts),
        "Account balances"
    );
    let mut sorted: Vec<_> = accounts.values().collect();
    sorted.sort_by_key(|account| account.number());
    for account in sorted {
        debug!("{}", account);
    }
}

fn log_transactions(transactions: &[Transaction]) {
    let total_amount = transactions
        .iter()
        .try_fold(Decimal::ZERO, |total, tx| total.checked_add(tx.amount()));
    info!(
        transactions = transactions.len(),
        total_amount = ?total_amount,
        "Transactions"
    );
    for transaction in transactions {
        debug!("{}", transaction);
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional reader configuration for async loading (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ReaderConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

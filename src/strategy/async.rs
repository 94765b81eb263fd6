//! Asynchronous loading strategy
//!
//! Reads both input files with tokio file I/O and csv-async, in batches of
//! `batch_size` records. Only the loading is asynchronous: transactions are
//! still applied strictly in order, on one thread, after both files have been
//! fully validated.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── ReaderConfig (batch_size)
//!     ├── tokio current-thread runtime (one per load)
//!     └── AsyncReader (batch CSV reading via tokio-util compat)
//! ```

use crate::io::{parse_accounts_async, parse_transactions_async};
use crate::strategy::ProcessingStrategy;
use crate::types::{AccountNumber, Accounts, BankingError, Transaction};
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};
use tracing::warn;

/// Configuration for batched async reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Number of records read per batch
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl ReaderConfig {
    /// Create a new ReaderConfig, falling back to the default for a zero batch size
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous loading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: ReaderConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn block_on<F, T>(&self, future: F) -> Result<T, BankingError>
    where
        F: Future<Output = Result<T, BankingError>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| BankingError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;
        runtime.block_on(future)
    }
}

async fn open_compat(path: &Path) -> Result<Compat<tokio::fs::File>, BankingError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| BankingError::open_failed(path, e))?;
    // csv-async reads through the futures AsyncRead traits
    Ok(file.compat())
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn load_accounts(&self, path: &Path) -> Result<Accounts, BankingError> {
        self.block_on(async {
            let file = open_compat(path).await?;
            parse_accounts_async(file, self.config.batch_size).await
        })
    }

    fn load_transactions(
        &self,
        path: &Path,
        known_accounts: &HashSet<AccountNumber>,
    ) -> Result<Vec<Transaction>, BankingError> {
        self.block_on(async {
            let file = open_compat(path).await?;
            parse_transactions_async(known_accounts, file, self.config.batch_size).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BatchFiles, SyncProcessingStrategy};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case::custom(250, 250)]
    #[case::zero_falls_back(0, 1000)]
    fn test_reader_config_new(#[case] batch_size: usize, #[case] expected: usize) {
        assert_eq!(ReaderConfig::new(batch_size).batch_size, expected);
    }

    #[test]
    fn test_async_strategy_matches_sync_output() {
        let dir = TempDir::new().unwrap();
        let balances = dir.path().join("account_balances.csv");
        let transactions = dir.path().join("transactions.csv");
        fs::write(&balances, "1,100.00\n2,200.00\n3,0.00\n4,1000.00\n").unwrap();
        fs::write(
            &transactions,
            "1,2,50.00\n2,3,250.00\n4,3,700.00\n3,2,650.00\n",
        )
        .unwrap();

        let sync_files = BatchFiles {
            account_balances: balances.clone(),
            transactions: transactions.clone(),
            output: dir.path().join("sync_output.csv"),
        };
        let async_files = BatchFiles {
            output: dir.path().join("async_output.csv"),
            ..sync_files.clone()
        };

        SyncProcessingStrategy.process(&sync_files).unwrap();
        // A batch size of 1 forces one batch per record
        AsyncProcessingStrategy::new(ReaderConfig::new(1))
            .process(&async_files)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&async_files.output).unwrap(),
            fs::read_to_string(&sync_files.output).unwrap()
        );
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(ReaderConfig::default());

        let error = strategy
            .load_accounts(Path::new("nonexistent.csv"))
            .unwrap_err();

        assert!(matches!(error, BankingError::FileNotFound { .. }));
    }

    #[test]
    fn test_async_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AsyncProcessingStrategy>();
    }
}

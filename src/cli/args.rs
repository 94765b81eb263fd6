use crate::strategy::{BatchFiles, ReaderConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Simple banking service
#[derive(Parser, Debug)]
#[command(name = "simple-banking-service")]
#[command(about = "Simple banking service.", long_about = None)]
pub struct CliArgs {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug")
    #[arg(long = "log-level", value_name = "FILTER", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Processes transactions. Loads current account balances and daily
    /// transactions to apply, and outputs new account balances.
    #[command(name = "process-transactions", alias = "processTransactions")]
    ProcessTransactions(ProcessTransactionsArgs),
}

#[derive(Args, Debug)]
pub struct ProcessTransactionsArgs {
    /// A CSV file containing current account balances
    #[arg(short = 'a', long = "account-balances", visible_alias = "accountBalances", value_name = "FILE")]
    pub account_balances: PathBuf,

    /// A CSV file of transactions to apply
    #[arg(short = 't', long = "transactions", value_name = "FILE")]
    pub transactions: PathBuf,

    /// Output CSV file. This will contain the new account balances after applying all transactions
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Strategy used to read the input files
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records read per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records read per batch in async mode (default: 1000)"
    )]
    pub batch_size: Option<usize>,
}

/// Available strategies for reading the input files
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl ProcessTransactionsArgs {
    /// Create a ReaderConfig from CLI arguments, falling back to defaults
    pub fn to_reader_config(&self) -> ReaderConfig {
        match self.batch_size {
            Some(batch_size) => ReaderConfig::new(batch_size),
            None => ReaderConfig::default(),
        }
    }

    /// The input and output files named on the command line
    pub fn batch_files(&self) -> BatchFiles {
        BatchFiles {
            account_balances: self.account_balances.clone(),
            transactions: self.transactions.clone(),
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn process_args(args: &[&str]) -> ProcessTransactionsArgs {
        match CliArgs::try_parse_from(args).unwrap().command {
            Command::ProcessTransactions(args) => args,
        }
    }

    #[rstest]
    #[case::short(&["program", "process-transactions", "-a", "in.csv", "-t", "tx.csv", "-o", "out.csv"])]
    #[case::long(&[
        "program", "process-transactions",
        "--account-balances", "in.csv", "--transactions", "tx.csv", "--output", "out.csv",
    ])]
    #[case::camel_case_aliases(&[
        "program", "processTransactions",
        "--accountBalances", "in.csv", "--transactions", "tx.csv", "--output", "out.csv",
    ])]
    fn test_file_arguments(#[case] args: &[&str]) {
        let parsed = process_args(args);
        assert_eq!(
            parsed.batch_files(),
            BatchFiles {
                account_balances: PathBuf::from("in.csv"),
                transactions: PathBuf::from("tx.csv"),
                output: PathBuf::from("out.csv"),
            }
        );
    }

    #[rstest]
    #[case::default_strategy(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--strategy", "sync"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--strategy", "async"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = process_args(args);
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::default(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o"], 1000)]
    #[case::custom(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--batch-size", "50"], 50)]
    #[case::zero_falls_back(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--batch-size", "0"], 1000)]
    fn test_reader_config_conversion(#[case] args: &[&str], #[case] expected_batch_size: usize) {
        assert_eq!(
            process_args(args).to_reader_config().batch_size,
            expected_batch_size
        );
    }

    #[rstest]
    #[case::default(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o"], "info")]
    #[case::before_subcommand(&["program", "--log-level", "debug", "process-transactions", "-a", "a", "-t", "t", "-o", "o"], "debug")]
    #[case::after_subcommand(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--log-level", "warn"], "warn")]
    fn test_log_level(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(CliArgs::try_parse_from(args).unwrap().log_level, expected);
    }

    #[rstest]
    #[case::missing_subcommand(&["program"])]
    #[case::missing_output(&["program", "process-transactions", "-a", "a", "-t", "t"])]
    #[case::missing_balances(&["program", "process-transactions", "-t", "t", "-o", "o"])]
    #[case::invalid_strategy(&["program", "process-transactions", "-a", "a", "-t", "t", "-o", "o", "--strategy", "invalid"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}

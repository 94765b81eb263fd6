//! Simple Banking Service CLI
//!
//! Command-line interface for applying a batch of transfers to account balances.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- process-transactions -a account_balances.csv -t transactions.csv -o output.csv
//! cargo run -- process-transactions -a account_balances.csv -t transactions.csv -o output.csv --strategy async
//! cargo run -- --log-level debug process-transactions -a balances.csv -t transactions.csv -o output.csv
//! ```
//!
//! Progress is logged to stderr. The new balances are written to the output file
//! only if every transaction was applied.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid record, insufficient balance, etc.)

use simple_banking_service::cli::{self, Command};
use simple_banking_service::logging;
use simple_banking_service::strategy;
use std::process;
use tracing::{error, info};

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    match args.command {
        Command::ProcessTransactions(command) => {
            let strategy = {
                let config = if matches!(command.strategy, cli::StrategyType::Async) {
                    Some(command.to_reader_config())
                } else {
                    None
                };
                strategy::create_strategy(command.strategy.clone(), config)
            };

            match strategy.process(&command.batch_files()) {
                Ok(summary) => info!(
                    accounts = summary.accounts,
                    transactions = summary.transactions,
                    "Done"
                ),
                Err(e) => {
                    error!(error = %e, "Processing failed");
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}

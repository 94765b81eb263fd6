//! I/O module
//!
//! Handles CSV parsing, record validation and output.
//!
//! # Components
//!
//! - `records` - Raw CSV record types and decimal conversion
//! - `csv_format` - Shared CSV dialect and account output serialization
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `accounts_parser` - Account balance validation
//! - `transactions_parser` - Transaction validation against known accounts

pub mod accounts_parser;
pub mod async_reader;
pub mod csv_format;
pub mod records;
pub mod sync_reader;
pub mod transactions_parser;

pub use accounts_parser::{parse_accounts, parse_accounts_async, parse_accounts_file, AccountsParser};
pub use async_reader::AsyncReader;
pub use csv_format::write_accounts_csv;
pub use records::{AccountBalanceRecord, TransactionRecord};
pub use sync_reader::SyncReader;
pub use transactions_parser::{
    parse_transactions, parse_transactions_async, parse_transactions_file, TransactionsParser,
};

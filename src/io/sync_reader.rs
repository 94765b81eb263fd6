//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over raw records of a headerless CSV file.
//! The reader is generic over the record type so the same code serves both the
//! account balance file and the transaction file.
//!
//! # Iterator Interface
//!
//! SyncReader yields `Result<(u64, T), BankingError>`, pairing each record with
//! its 1-based record number:
//!
//! ```no_run
//! use simple_banking_service::io::records::TransactionRecord;
//! use simple_banking_service::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::<_, TransactionRecord>::open(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok((line, record)) => println!("{}: {:?}", line, record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file is reported as [`BankingError::FileNotFound`] from `open()`
//! - Structural CSV errors are yielded as `Err` items; callers stop at the first one

use crate::io::csv_format::reader_builder;
use crate::types::BankingError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads records one at a time, so memory use does not grow with file size.
pub struct SyncReader<R: Read, T> {
    records: csv::DeserializeRecordsIntoIter<R, T>,
    line_num: u64,
}

impl<T: DeserializeOwned> SyncReader<File, T> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Errors
    ///
    /// * [`BankingError::FileNotFound`] if the file does not exist
    /// * [`BankingError::IoError`] if it exists but cannot be opened
    pub fn open(path: &Path) -> Result<Self, BankingError> {
        let file = File::open(path).map_err(|e| BankingError::open_failed(path, e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read, T: DeserializeOwned> SyncReader<R, T> {
    /// Wrap any reader providing CSV data
    pub fn from_reader(reader: R) -> Self {
        let records = reader_builder().from_reader(reader).into_deserialize();
        Self {
            records,
            line_num: 0,
        }
    }
}

impl<R: Read, T: DeserializeOwned> Iterator for SyncReader<R, T> {
    type Item = Result<(u64, T), BankingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.line_num += 1;
        Some(
            result
                .map(|record| (self.line_num, record))
                .map_err(BankingError::from),
        )
    }
}

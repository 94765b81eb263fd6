//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading over raw records of a headerless CSV file, backed by
//! csv-async. Used by the async processing strategy to load the balance and
//! transaction files without blocking.
//!
//! # Architecture
//!
//! ```text
//! tokio::fs::File → compat → AsyncReader → Batches of (line, record)
//!                                ↓
//!                        csv_format module
//!                     (shared CSV dialect)
//! ```

use crate::io::csv_format::async_reader_builder;
use crate::types::BankingError;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Asynchronous CSV reader
///
/// Reads records in batches, keeping memory bounded by the batch size.
pub struct AsyncReader<R: AsyncRead + Unpin, T> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
    _record: PhantomData<T>,
}

impl<R, T> AsyncReader<R, T>
where
    R: AsyncRead + Unpin + Send + 'static,
    T: DeserializeOwned + 'static,
{
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = async_reader_builder().create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 0,
            _record: PhantomData,
        }
    }

    /// Read a batch of records
    ///
    /// Reads up to `batch_size` records, each paired with its 1-based record
    /// number. Returns an empty vector only at end of file; a `batch_size` of
    /// zero is treated as one.
    ///
    /// # Errors
    ///
    /// Returns the first structural CSV error encountered. Records read before
    /// the error in the same batch are discarded, since the whole load aborts.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<(u64, T)>, BankingError> {
        let batch_size = batch_size.max(1);
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<T>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(record) => {
                    self.line_num += 1;
                    batch.push((self.line_num, record?));
                }
                None => break,
            }
        }

        Ok(batch)
    }
}

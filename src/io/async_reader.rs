//! Asynchronous CSV reader with batch interface
//!
//! Reads calculation requests from any `futures` async reader in batches.
//! Uses csv-async for streaming parsing and the csv_format module for row
//! conversion.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of (RequestId, CalculationRequest)
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CalculationRequest, RequestId};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read a batch of calculation requests
    ///
    /// Reads up to `batch_size` valid records. Records that fail to parse or
    /// convert are logged and skipped without counting toward the batch.
    ///
    /// Returns an empty vector once the end of the file is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<(RequestId, CalculationRequest)> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(request) => batch.push(request),
                    Err(e) => warn!(error = %e, "skipping unconvertible record"),
                },
                Some(Err(e)) => warn!(error = %e, "skipping malformed CSV record"),
                None => break,
            }
        }

        batch
    }
}

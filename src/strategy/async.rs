//! Asynchronous batch processing strategy
//!
//! Reads requests in batches and evaluates several batches at once on a
//! tokio multi-threaded runtime.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── tokio tasks, one per batch, each with its own InterestCalculator
//! ```
//!
//! Every calculation builds its own account, so batches share nothing and
//! need no locking. Outcomes are merged and sorted by id before writing, so
//! the output matches the sync strategy.

use crate::core::InterestCalculator;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_outcomes_csv;
use crate::strategy::{evaluate_request, ProcessingStrategy};
use crate::types::{CalculationOutcome, CalculationRequest, RequestId};
use std::io::Write;
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Configuration for batch processing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of requests per batch
    pub batch_size: usize,
    /// Maximum number of batches processing concurrently
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing zero values with defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    fn spawn_batch(
        batch: Vec<(RequestId, CalculationRequest)>,
    ) -> JoinHandle<Vec<CalculationOutcome>> {
        tokio::spawn(async move {
            let calculator = InterestCalculator::new();
            batch
                .iter()
                .map(|(id, request)| evaluate_request(&calculator, *id, request))
                .collect()
        })
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process requests from input file and write results to output
    ///
    /// Reads up to `max_concurrent_batches` batches, spawns one task per
    /// batch, waits for all of them, and repeats until the file is drained.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        let outcomes = runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut outcomes = Vec::new();
            let mut batches = 0usize;

            loop {
                let mut tasks = Vec::with_capacity(self.config.max_concurrent_batches);

                while tasks.len() < self.config.max_concurrent_batches {
                    let batch = reader.read_batch(self.config.batch_size).await;
                    if batch.is_empty() {
                        break;
                    }
                    tasks.push(Self::spawn_batch(batch));
                }

                if tasks.is_empty() {
                    break;
                }

                batches += tasks.len();
                for task in tasks {
                    let batch_outcomes = task
                        .await
                        .map_err(|e| format!("Batch task failed: {}", e))?;
                    outcomes.extend(batch_outcomes);
                }
            }

            info!(batches, processed = outcomes.len(), "async batch complete");

            Ok::<_, String>(outcomes)
        })?;

        write_outcomes_csv(&outcomes, output)?;

        Ok(())
    }
}

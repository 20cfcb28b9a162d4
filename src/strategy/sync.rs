//! Synchronous processing strategy
//!
//! Single-threaded pipeline: stream rows with `SyncReader`, evaluate each
//! one as it is read, then write every outcome with
//! `csv_format::write_outcomes_csv`.

use crate::core::InterestCalculator;
use crate::io::csv_format::write_outcomes_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{evaluate_request, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// ```no_run
/// use interest_calculator::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("requests.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let calculator = InterestCalculator::new();
        let reader = SyncReader::new(input_path)?;

        let mut outcomes = Vec::new();
        let mut skipped = 0usize;

        for result in reader {
            match result {
                Ok((id, request)) => outcomes.push(evaluate_request(&calculator, id, &request)),
                Err(e) => {
                    skipped += 1;
                    warn!(error = %e, "skipping record");
                }
            }
        }

        info!(
            processed = outcomes.len(),
            skipped,
            "sync batch complete"
        );

        write_outcomes_csv(&outcomes, output)?;

        Ok(())
    }
}

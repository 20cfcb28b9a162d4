//! Processing strategy module for batch calculation
//!
//! A strategy owns the complete batch pipeline: read requests from a CSV
//! file, run each through the [`InterestCalculator`], and write one result
//! row per request. Sync and async implementations can be selected at
//! runtime and produce identical output.

use crate::cli::StrategyType;
use crate::core::InterestCalculator;
use crate::types::{CalculationOutcome, CalculationRequest, RequestId};
use std::io::Write;
use std::path::Path;
use tracing::warn;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete batch pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process requests from input file and write results to output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Malformed rows are logged and skipped. Rejected requests are not
    /// errors here; they are written to the output with their reason.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` only applies to the async strategy and falls back to
/// `BatchConfig::default()` when absent.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

/// Run one batch row through the calculator
pub fn evaluate_request(
    calculator: &InterestCalculator,
    id: RequestId,
    request: &CalculationRequest,
) -> CalculationOutcome {
    let result = calculator.quote(request);

    if let Err(e) = &result {
        warn!(id, product = %request.product_type(), reason = %e, "request rejected");
    }

    CalculationOutcome {
        id,
        product: request.product_type(),
        result,
    }
}

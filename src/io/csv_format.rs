//! CSV format handling for calculation requests and results
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to calculation requests
//! - Result output serialization
//!
//! Input columns: `id,product,amount,variant,tenure,age`. `variant` is only
//! read for SB rows; `tenure` is days for FD and months for RD.
//!
//! Output columns: `id,product,rate,interest,error`, one row per request,
//! sorted by id.

use crate::types::{CalculationOutcome, CalculationRequest, ProductType, RequestId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Every column but `id` and `product` is optional here; which ones a row
/// actually needs depends on its product and is checked during conversion.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: RequestId,
    pub product: String,
    pub amount: Option<String>,
    pub variant: Option<String>,
    pub tenure: Option<i64>,
    pub age: Option<i64>,
}

/// Convert a CsvRecord to a calculation request
///
/// Parses the product code and amount and checks that the columns the
/// product needs are present. Value ranges (negative amounts, ages, tenures)
/// are left for the account constructors to reject.
///
/// # Returns
///
/// Result containing either:
/// - Ok((RequestId, CalculationRequest)) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(
    csv_record: CsvRecord,
) -> Result<(RequestId, CalculationRequest), String> {
    let id = csv_record.id;

    let product = ProductType::from_str(&csv_record.product)
        .map_err(|e| format!("{} (request {})", e, id))?;

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim())
                .map_err(|_| format!("Invalid amount '{}' for request {}", amount_str, id))?
        }
        _ => return Err(format!("{} request {} requires an amount", product, id)),
    };

    let require = |value: Option<i64>, column: &str| {
        value.ok_or_else(|| format!("{} request {} is missing '{}'", product, id, column))
    };

    let request = match product {
        ProductType::Savings => {
            let variant = csv_record
                .variant
                .filter(|variant| !variant.trim().is_empty())
                .ok_or_else(|| format!("{} request {} is missing 'variant'", product, id))?;
            CalculationRequest::savings(amount, &variant)
        }
        ProductType::FixedDeposit => CalculationRequest::fixed_deposit(
            amount,
            require(csv_record.tenure, "tenure")?,
            require(csv_record.age, "age")?,
        ),
        ProductType::RecurringDeposit => CalculationRequest::recurring_deposit(
            amount,
            require(csv_record.tenure, "tenure")?,
            require(csv_record.age, "age")?,
        ),
    };

    Ok((id, request))
}

/// Format a rate or amount with two decimal places
pub(crate) fn format_amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write calculation outcomes to CSV format
///
/// Writes outcomes with columns: id, product, rate, interest, error.
/// Rejected requests leave rate and interest empty and carry the
/// validation reason; an unresolved rate leaves only the rate empty.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_outcomes_csv(
    outcomes: &[CalculationOutcome],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "product", "rate", "interest", "error"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort by request id for deterministic output
    let mut sorted_outcomes: Vec<&CalculationOutcome> = outcomes.iter().collect();
    sorted_outcomes.sort_by_key(|outcome| outcome.id);

    for outcome in sorted_outcomes {
        let (rate, interest, error) = match &outcome.result {
            Ok(quote) => (
                quote.rate.map(format_amount).unwrap_or_default(),
                format_amount(quote.interest),
                String::new(),
            ),
            Err(e) => (String::new(), String::new(), e.reason()),
        };

        writer
            .write_record(&[
                outcome.id.to_string(),
                outcome.product.to_string(),
                rate,
                interest,
                error,
            ])
            .map_err(|e| format!("Failed to write result record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

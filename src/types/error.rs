//! Error types for the interest calculator
//!
//! Every rejected input surfaces as a [`ValidationError`]. Validation runs
//! eagerly when an account is constructed, so rate resolution and interest
//! computation never fail.
//!
//! The `Display` text of each variant is the reason shown to the user.

use thiserror::Error;

/// Rejected calculation input
///
/// Raised synchronously while building an account (or while parsing a
/// product type). Callers are expected to show the reason and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Principal below zero (savings and fixed deposit)
    #[error("Invalid amount. Please enter non-negative values.")]
    NegativeAmount,

    /// Monthly instalment below zero (recurring deposit)
    #[error("Invalid monthly amount. Please enter non-negative values.")]
    NegativeMonthlyAmount,

    /// Fixed deposit tenure below zero
    #[error("Invalid Number of days. Please enter non-negative values.")]
    NegativeTenureDays,

    /// Recurring deposit tenure outside {6, 9, 12, 15, 18, 21}
    ///
    /// Negative month counts land here too.
    #[error("Invalid months. Please enter 6, 9, 12, 15, 18, or 21 months.")]
    UnsupportedTenureMonths {
        /// The rejected month count
        months: i64,
    },

    /// Account holder age below zero
    #[error("Invalid age. Please enter non-negative values.")]
    NegativeAge,

    /// Product code that is none of SB, FD or RD
    #[error("Unknown product type '{value}'. Expected SB, FD or RD.")]
    UnknownProduct {
        /// The text that failed to parse
        value: String,
    },
}

impl ValidationError {
    /// Create an UnsupportedTenureMonths error
    pub fn unsupported_tenure_months(months: i64) -> Self {
        ValidationError::UnsupportedTenureMonths { months }
    }

    /// Create an UnknownProduct error
    pub fn unknown_product(value: &str) -> Self {
        ValidationError::UnknownProduct {
            value: value.to_string(),
        }
    }

    /// Human-readable reason for the rejection
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

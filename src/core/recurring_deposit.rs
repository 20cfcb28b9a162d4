//! Recurring deposit (RD) rate rules
//!
//! Only six tenures are offered. Each has a regular and a senior rate:
//!
//! | months | regular | senior |
//! |--------|---------|--------|
//! | 6      | 7.5     | 8.0    |
//! | 9      | 7.75    | 8.25   |
//! | 12     | 8.0     | 8.5    |
//! | 15     | 8.25    | 8.75   |
//! | 18     | 8.5     | 9.0    |
//! | 21     | 8.75    | 9.25   |
//!
//! Any other month count is rejected at construction, so rate lookup is a
//! total function over [`RdTenure`].

use super::SENIOR_CITIZEN_AGE;
use crate::types::ValidationError;
use rust_decimal::Decimal;

/// Supported recurring deposit tenures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdTenure {
    Months6,
    Months9,
    Months12,
    Months15,
    Months18,
    Months21,
}

impl RdTenure {
    pub fn months(&self) -> u32 {
        match self {
            RdTenure::Months6 => 6,
            RdTenure::Months9 => 9,
            RdTenure::Months12 => 12,
            RdTenure::Months15 => 15,
            RdTenure::Months18 => 18,
            RdTenure::Months21 => 21,
        }
    }

    /// (regular, senior) rates in hundredths of a percent
    fn rates(&self) -> (i64, i64) {
        match self {
            RdTenure::Months6 => (750, 800),
            RdTenure::Months9 => (775, 825),
            RdTenure::Months12 => (800, 850),
            RdTenure::Months15 => (825, 875),
            RdTenure::Months18 => (850, 900),
            RdTenure::Months21 => (875, 925),
        }
    }
}

impl TryFrom<i64> for RdTenure {
    type Error = ValidationError;

    fn try_from(months: i64) -> Result<Self, Self::Error> {
        match months {
            6 => Ok(RdTenure::Months6),
            9 => Ok(RdTenure::Months9),
            12 => Ok(RdTenure::Months12),
            15 => Ok(RdTenure::Months15),
            18 => Ok(RdTenure::Months18),
            21 => Ok(RdTenure::Months21),
            _ => Err(ValidationError::unsupported_tenure_months(months)),
        }
    }
}

/// Recurring-deposit-specific account parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringDepositAccount {
    pub tenure: RdTenure,
    pub holder_age: u64,
}

impl RecurringDepositAccount {
    /// Validate tenure, then age
    ///
    /// # Errors
    ///
    /// - `UnsupportedTenureMonths` if `tenure_months` is not 6, 9, 12, 15, 18 or 21
    /// - `NegativeAge` if `holder_age < 0`
    pub fn new(tenure_months: i64, holder_age: i64) -> Result<Self, ValidationError> {
        let tenure = RdTenure::try_from(tenure_months)?;
        let holder_age = u64::try_from(holder_age).map_err(|_| ValidationError::NegativeAge)?;

        Ok(Self { tenure, holder_age })
    }

    pub fn is_senior(&self) -> bool {
        self.holder_age >= SENIOR_CITIZEN_AGE
    }

    pub fn rate(&self) -> Decimal {
        let (regular, senior) = self.tenure.rates();
        let hundredths = if self.is_senior() { senior } else { regular };
        Decimal::new(hundredths, 2)
    }
}

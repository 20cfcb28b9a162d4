//! Fixed deposit (FD) rate rules
//!
//! Two stacked tables selected by the principal. Below
//! [`LARGE_DEPOSIT_THRESHOLD`] the rate depends on the tenure band and on
//! whether the holder is a senior citizen; at or above it every holder
//! gets the same flat rate for the band.
//!
//! | tenure (days) | regular | senior | large deposit |
//! |---------------|---------|--------|---------------|
//! | 7–14          | 4.5     | 5.0    | 6.5           |
//! | 15–29         | 4.75    | 5.25   | 6.75          |
//! | 30–45         | 5.5     | 6.0    | 6.75          |
//! | 46–60         | 7.0     | 7.5    | 8.0           |
//! | 61–184        | 7.5     | 8.0    | 8.5           |
//! | 185–365       | 8.0     | 8.5    | 10.0          |
//!
//! Bands are closed on both ends. A tenure outside every band (0–6 days or
//! more than 365) resolves no rate.

use super::SENIOR_CITIZEN_AGE;
use crate::types::ValidationError;
use rust_decimal::Decimal;

/// Principal at which the flat large-deposit table takes over
pub const LARGE_DEPOSIT_THRESHOLD: i64 = 10_000_000;

/// One closed tenure interval and its rates, in hundredths of a percent
#[derive(Debug, Clone, Copy)]
struct RateBand {
    min_days: u64,
    max_days: u64,
    regular: i64,
    senior: i64,
    large_deposit: i64,
}

impl RateBand {
    fn contains(&self, days: u64) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }
}

#[rustfmt::skip]
const RATE_BANDS: [RateBand; 6] = [
    RateBand { min_days: 7, max_days: 14, regular: 450, senior: 500, large_deposit: 650 },
    RateBand { min_days: 15, max_days: 29, regular: 475, senior: 525, large_deposit: 675 },
    RateBand { min_days: 30, max_days: 45, regular: 550, senior: 600, large_deposit: 675 },
    RateBand { min_days: 46, max_days: 60, regular: 700, senior: 750, large_deposit: 800 },
    RateBand { min_days: 61, max_days: 184, regular: 750, senior: 800, large_deposit: 850 },
    RateBand { min_days: 185, max_days: 365, regular: 800, senior: 850, large_deposit: 1000 },
];

/// Fixed-deposit-specific account parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDepositAccount {
    pub tenure_days: u64,
    pub holder_age: u64,
}

impl FixedDepositAccount {
    /// Validate tenure, then age
    ///
    /// # Errors
    ///
    /// - `NegativeTenureDays` if `tenure_days < 0`
    /// - `NegativeAge` if `holder_age < 0`
    pub fn new(tenure_days: i64, holder_age: i64) -> Result<Self, ValidationError> {
        let tenure_days =
            u64::try_from(tenure_days).map_err(|_| ValidationError::NegativeTenureDays)?;
        let holder_age = u64::try_from(holder_age).map_err(|_| ValidationError::NegativeAge)?;

        Ok(Self {
            tenure_days,
            holder_age,
        })
    }

    pub fn is_senior(&self) -> bool {
        self.holder_age >= SENIOR_CITIZEN_AGE
    }

    /// Rate in percent for the given principal, `None` if no band matches
    pub fn rate(&self, principal: Decimal) -> Option<Decimal> {
        let band = RATE_BANDS.iter().find(|band| band.contains(self.tenure_days))?;

        let hundredths = if principal >= Decimal::from(LARGE_DEPOSIT_THRESHOLD) {
            band.large_deposit
        } else if self.is_senior() {
            band.senior
        } else {
            band.regular
        };

        Some(Decimal::new(hundredths, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn small() -> Decimal {
        Decimal::new(50_000, 0)
    }

    fn large() -> Decimal {
        Decimal::from(LARGE_DEPOSIT_THRESHOLD)
    }

    #[rstest]
    #[case::negative_days(-5, 35, ValidationError::NegativeTenureDays)]
    #[case::negative_age(10, -5, ValidationError::NegativeAge)]
    #[case::days_checked_before_age(-1, -1, ValidationError::NegativeTenureDays)]
    fn test_new_rejects_negative_values(
        #[case] days: i64,
        #[case] age: i64,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(FixedDepositAccount::new(days, age), Err(expected));
    }

    #[test]
    fn test_new_accepts_zero_values() {
        let account = FixedDepositAccount::new(0, 0).unwrap();
        assert_eq!(account.tenure_days, 0);
        assert_eq!(account.holder_age, 0);
    }

    #[rstest]
    #[case(59, false)]
    #[case(60, true)]
    #[case(75, true)]
    fn test_senior_flag(#[case] age: i64, #[case] expected: bool) {
        assert_eq!(FixedDepositAccount::new(10, age).unwrap().is_senior(), expected);
    }

    #[rstest]
    #[case(10, 35, Decimal::new(45, 1))]
    #[case(10, 65, Decimal::new(50, 1))]
    #[case(20, 35, Decimal::new(475, 2))]
    #[case(20, 65, Decimal::new(525, 2))]
    #[case(40, 35, Decimal::new(55, 1))]
    #[case(40, 65, Decimal::new(60, 1))]
    #[case(50, 35, Decimal::new(70, 1))]
    #[case(50, 65, Decimal::new(75, 1))]
    #[case(90, 35, Decimal::new(75, 1))]
    #[case(90, 65, Decimal::new(80, 1))]
    #[case(200, 35, Decimal::new(80, 1))]
    #[case(200, 65, Decimal::new(85, 1))]
    fn test_rate_below_threshold(#[case] days: i64, #[case] age: i64, #[case] expected: Decimal) {
        let account = FixedDepositAccount::new(days, age).unwrap();
        assert_eq!(account.rate(small()), Some(expected));
    }

    #[rstest]
    #[case(10, Decimal::new(65, 1))]
    #[case(20, Decimal::new(675, 2))]
    #[case(40, Decimal::new(675, 2))]
    #[case(50, Decimal::new(80, 1))]
    #[case(90, Decimal::new(85, 1))]
    #[case(200, Decimal::new(100, 1))]
    fn test_rate_at_or_above_threshold_ignores_age(
        #[case] days: i64,
        #[case] expected: Decimal,
        #[values(35, 60, 80)] age: i64,
    ) {
        let account = FixedDepositAccount::new(days, age).unwrap();
        assert_eq!(account.rate(large()), Some(expected));
        assert_eq!(account.rate(large() + Decimal::ONE), Some(expected));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let account = FixedDepositAccount::new(90, 35).unwrap();
        assert_eq!(account.rate(large() - Decimal::ONE), Some(Decimal::new(75, 1)));
        assert_eq!(account.rate(large()), Some(Decimal::new(85, 1)));
    }

    #[rstest]
    #[case::first_band_start(7, Decimal::new(45, 1))]
    #[case::first_band_end(14, Decimal::new(45, 1))]
    #[case::second_band_start(15, Decimal::new(475, 2))]
    #[case::second_band_end(29, Decimal::new(475, 2))]
    #[case::third_band_start(30, Decimal::new(55, 1))]
    #[case::third_band_end(45, Decimal::new(55, 1))]
    #[case::fourth_band_start(46, Decimal::new(70, 1))]
    #[case::fourth_band_end(60, Decimal::new(70, 1))]
    #[case::fifth_band_start(61, Decimal::new(75, 1))]
    #[case::fifth_band_end(184, Decimal::new(75, 1))]
    #[case::sixth_band_start(185, Decimal::new(80, 1))]
    #[case::sixth_band_end(365, Decimal::new(80, 1))]
    fn test_band_edges(#[case] days: i64, #[case] expected: Decimal) {
        let account = FixedDepositAccount::new(days, 35).unwrap();
        assert_eq!(account.rate(small()), Some(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(366)]
    #[case(10_000)]
    fn test_out_of_band_tenure_resolves_no_rate(
        #[case] days: i64,
        #[values(false, true)] large_deposit: bool,
    ) {
        let account = FixedDepositAccount::new(days, 35).unwrap();
        let principal = if large_deposit { large() } else { small() };
        assert_eq!(account.rate(principal), None);
    }
}

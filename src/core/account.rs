//! Account model shared by every deposit product
//!
//! An [`Account`] holds the principal, the product-specific parameters in
//! [`AccountKind`], and the rate resolved by the last call to
//! [`Account::compute_interest`].
//!
//! All validation happens in the constructors. Checks run in a fixed order
//! and the first violation is returned; nothing is computed on a rejected
//! input.

use super::fixed_deposit::FixedDepositAccount;
use super::recurring_deposit::RecurringDepositAccount;
use super::savings::SavingsAccount;
use crate::types::{CalculationRequest, ProductType, ValidationError};
use rust_decimal::Decimal;
use tracing::debug;

/// Product-specific parameters and rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Savings(SavingsAccount),
    FixedDeposit(FixedDepositAccount),
    RecurringDeposit(RecurringDepositAccount),
}

/// A single-use account built for one calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Principal, or monthly instalment for recurring deposits. Never negative.
    principal: Decimal,

    kind: AccountKind,

    /// Set by `compute_interest`; stays `None` when no rate applies
    resolved_rate: Option<Decimal>,
}

impl Account {
    /// Build a savings account
    ///
    /// # Errors
    ///
    /// `NegativeAmount` if `amount < 0`.
    pub fn savings(amount: Decimal, variant: &str) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }

        Ok(Self::with_kind(
            amount,
            AccountKind::Savings(SavingsAccount::new(variant)),
        ))
    }

    /// Build a fixed deposit account
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - `NegativeAmount` if `amount < 0`
    /// - `NegativeTenureDays` if `tenure_days < 0`
    /// - `NegativeAge` if `age < 0`
    pub fn fixed_deposit(
        amount: Decimal,
        tenure_days: i64,
        age: i64,
    ) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }

        let fixed_deposit = FixedDepositAccount::new(tenure_days, age)?;
        Ok(Self::with_kind(amount, AccountKind::FixedDeposit(fixed_deposit)))
    }

    /// Build a recurring deposit account
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - `NegativeMonthlyAmount` if `monthly_amount < 0`
    /// - `UnsupportedTenureMonths` if `tenure_months` is not an offered tenure
    /// - `NegativeAge` if `age < 0`
    pub fn recurring_deposit(
        monthly_amount: Decimal,
        tenure_months: i64,
        age: i64,
    ) -> Result<Self, ValidationError> {
        if monthly_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeMonthlyAmount);
        }

        let recurring_deposit = RecurringDepositAccount::new(tenure_months, age)?;
        Ok(Self::with_kind(
            monthly_amount,
            AccountKind::RecurringDeposit(recurring_deposit),
        ))
    }

    fn with_kind(principal: Decimal, kind: AccountKind) -> Self {
        Self {
            principal,
            kind,
            resolved_rate: None,
        }
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn product_type(&self) -> ProductType {
        match self.kind {
            AccountKind::Savings(_) => ProductType::Savings,
            AccountKind::FixedDeposit(_) => ProductType::FixedDeposit,
            AccountKind::RecurringDeposit(_) => ProductType::RecurringDeposit,
        }
    }

    /// Rate resolved by the last `compute_interest` call
    pub fn resolved_rate(&self) -> Option<Decimal> {
        self.resolved_rate
    }

    /// Resolve the rate for this account and return `principal * rate / 100`
    ///
    /// Never fails. An unresolved rate yields zero interest.
    pub fn compute_interest(&mut self) -> Decimal {
        let rate = match &self.kind {
            AccountKind::Savings(savings) => Some(savings.rate()),
            AccountKind::FixedDeposit(fixed_deposit) => fixed_deposit.rate(self.principal),
            AccountKind::RecurringDeposit(recurring_deposit) => Some(recurring_deposit.rate()),
        };

        debug!(
            product = %self.product_type(),
            principal = %self.principal,
            rate = ?rate,
            "resolved interest rate"
        );

        self.resolved_rate = rate;

        // rate / 100 is below one, so the product never exceeds the principal
        rate.map_or(Decimal::ZERO, |rate| {
            self.principal * (rate / Decimal::ONE_HUNDRED)
        })
    }
}

impl TryFrom<&CalculationRequest> for Account {
    type Error = ValidationError;

    fn try_from(request: &CalculationRequest) -> Result<Self, Self::Error> {
        match request {
            CalculationRequest::Savings(params) => Account::savings(params.amount, &params.variant),
            CalculationRequest::FixedDeposit(params) => {
                Account::fixed_deposit(params.amount, params.tenure_days, params.age)
            }
            CalculationRequest::RecurringDeposit(params) => Account::recurring_deposit(
                params.monthly_amount,
                params.tenure_months,
                params.age,
            ),
        }
    }
}

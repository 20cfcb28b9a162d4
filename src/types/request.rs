//! Calculation request types
//!
//! A request pairs a product type with the raw parameters the caller
//! supplied. Nothing here is validated yet: negative amounts, ages and
//! tenures are carried as-is and rejected when the account is built.

use super::error::ValidationError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Caller-chosen request identifier (batch mode)
pub type RequestId = u32;

/// Deposit product offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Savings bank account (SB)
    Savings,

    /// Fixed deposit (FD), tenure in days
    FixedDeposit,

    /// Recurring deposit (RD), tenure in months
    RecurringDeposit,
}

impl ProductType {
    /// Short product code as printed in reports
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Savings => "SB",
            ProductType::FixedDeposit => "FD",
            ProductType::RecurringDeposit => "RD",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sb" | "savings" => Ok(ProductType::Savings),
            "fd" | "fixed-deposit" => Ok(ProductType::FixedDeposit),
            "rd" | "recurring-deposit" => Ok(ProductType::RecurringDeposit),
            _ => Err(ValidationError::unknown_product(s)),
        }
    }
}

/// Raw savings parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsParams {
    /// Average balance held in the account
    pub amount: Decimal,

    /// Account variant text, matched case-insensitively ("Normal", "NRI")
    pub variant: String,
}

/// Raw fixed deposit parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDepositParams {
    pub amount: Decimal,
    pub tenure_days: i64,
    pub age: i64,
}

/// Raw recurring deposit parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringDepositParams {
    pub monthly_amount: Decimal,
    pub tenure_months: i64,
    pub age: i64,
}

/// One calculation request, tagged by product
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationRequest {
    Savings(SavingsParams),
    FixedDeposit(FixedDepositParams),
    RecurringDeposit(RecurringDepositParams),
}

impl CalculationRequest {
    /// Build a savings request
    pub fn savings(amount: Decimal, variant: &str) -> Self {
        CalculationRequest::Savings(SavingsParams {
            amount,
            variant: variant.to_string(),
        })
    }

    /// Build a fixed deposit request
    pub fn fixed_deposit(amount: Decimal, tenure_days: i64, age: i64) -> Self {
        CalculationRequest::FixedDeposit(FixedDepositParams {
            amount,
            tenure_days,
            age,
        })
    }

    /// Build a recurring deposit request
    pub fn recurring_deposit(monthly_amount: Decimal, tenure_months: i64, age: i64) -> Self {
        CalculationRequest::RecurringDeposit(RecurringDepositParams {
            monthly_amount,
            tenure_months,
            age,
        })
    }

    /// Product this request targets
    pub fn product_type(&self) -> ProductType {
        match self {
            CalculationRequest::Savings(_) => ProductType::Savings,
            CalculationRequest::FixedDeposit(_) => ProductType::FixedDeposit,
            CalculationRequest::RecurringDeposit(_) => ProductType::RecurringDeposit,
        }
    }
}

/// Result of a successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct InterestQuote {
    pub product: ProductType,

    /// Principal (or monthly amount for RD) the interest was computed on
    pub principal: Decimal,

    /// Rate in percent; `None` when no band matched (FD out-of-band tenure)
    pub rate: Option<Decimal>,

    /// `principal * rate / 100`, zero when the rate is unresolved
    pub interest: Decimal,
}

/// Batch-mode result for one input row
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub id: RequestId,
    pub product: ProductType,
    pub result: Result<InterestQuote, ValidationError>,
}

//! Interest Calculator Library
//! # Overview
//!
//! Tiered interest calculation for three deposit products, with a batch CSV
//! front end and an interactive menu driver on top.
//!
//! # Architecture
//!
//! - [`types`] - Requests, results and the validation error
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Account model and construction-time validation
//!   - [`core::savings`], [`core::fixed_deposit`], [`core::recurring_deposit`] - Rate rule tables
//!   - [`core::calculator`] - Stateless calculation service
//! - [`io`] - CSV request parsing and result output
//! - [`strategy`] - Sync and async batch pipelines
//! - [`cli`] - CLI arguments, logging setup and the interactive menu
//!
//! # Products
//!
//! - **SB** (savings): 4.0% for Normal, 6.0% for NRI accounts
//! - **FD** (fixed deposit): banded by tenure in days, with a senior rate
//!   from age 60 and a flat table for deposits of 10,000,000 or more
//! - **RD** (recurring deposit): 6, 9, 12, 15, 18 or 21 months, with a senior rate
//!
//! Interest is `principal * rate / 100`.
//!
//! ```
//! use interest_calculator::{CalculationRequest, InterestCalculator};
//! use rust_decimal::Decimal;
//!
//! let calculator = InterestCalculator::new();
//! let request = CalculationRequest::fixed_deposit(Decimal::new(50_000, 0), 10, 35);
//! assert_eq!(calculator.calculate(&request), Ok(Decimal::new(2250, 0)));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{Account, AccountKind, InterestCalculator};
pub use io::write_outcomes_csv;
pub use types::{
    CalculationOutcome, CalculationRequest, InterestQuote, ProductType, RequestId,
    ValidationError,
};

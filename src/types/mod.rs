//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `request`: product types, raw calculation requests and their results
//! - `error`: the validation error raised for rejected input

pub mod error;
pub mod request;

pub use error::ValidationError;
pub use request::{
    CalculationOutcome, CalculationRequest, FixedDepositParams, InterestQuote, ProductType,
    RecurringDepositParams, RequestId, SavingsParams,
};

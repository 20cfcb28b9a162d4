//! Interest calculator service
//!
//! Façade over the account model: builds the account matching the
//! request's product, propagates any validation failure unchanged, and
//! otherwise returns the computed interest.
//!
//! The calculator holds no state. Each call builds and drops its own
//! [`Account`], so one instance can be shared freely across threads and
//! tasks.

use super::account::Account;
use crate::types::{CalculationRequest, InterestQuote, ValidationError};
use rust_decimal::Decimal;

/// Stateless interest calculation service
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestCalculator;

impl InterestCalculator {
    pub fn new() -> Self {
        InterestCalculator
    }

    /// Compute the interest for a request
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` raised while building the account.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<Decimal, ValidationError> {
        self.quote(request).map(|quote| quote.interest)
    }

    /// Compute the interest along with the rate it was resolved from
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` raised while building the account.
    pub fn quote(&self, request: &CalculationRequest) -> Result<InterestQuote, ValidationError> {
        let mut account = Account::try_from(request)?;
        let interest = account.compute_interest();

        Ok(InterestQuote {
            product: account.product_type(),
            principal: account.principal(),
            rate: account.resolved_rate(),
            interest,
        })
    }
}

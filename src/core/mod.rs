//! Core business logic module
//!
//! This module contains the interest calculation components:
//! - `account` - Account model, construction-time validation and interest computation
//! - `savings` - Savings (SB) rate rules
//! - `fixed_deposit` - Fixed deposit (FD) rate bands
//! - `recurring_deposit` - Recurring deposit (RD) tenure table
//! - `calculator` - Stateless service façade used by every front end

pub mod account;
pub mod calculator;
pub mod fixed_deposit;
pub mod recurring_deposit;
pub mod savings;

pub use account::{Account, AccountKind};
pub use calculator::InterestCalculator;
pub use fixed_deposit::{FixedDepositAccount, LARGE_DEPOSIT_THRESHOLD};
pub use recurring_deposit::{RdTenure, RecurringDepositAccount};
pub use savings::{SavingsAccount, SavingsVariant};

/// Age from which the senior rate applies
pub const SENIOR_CITIZEN_AGE: u64 = 60;

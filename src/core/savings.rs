//! Savings account (SB) rate rules
//!
//! Savings interest depends only on the account variant:
//!
//! | variant | rate |
//! |---------|------|
//! | Normal  | 4.0  |
//! | NRI     | 6.0  |
//!
//! Variant text is matched case-insensitively. Any other text is kept as
//! [`SavingsVariant::Other`] and resolves a zero rate instead of failing.

use rust_decimal::Decimal;

/// Savings account variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingsVariant {
    Normal,
    Nri,
    /// Unrecognised variant text, kept verbatim
    Other(String),
}

impl From<&str> for SavingsVariant {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("normal") {
            SavingsVariant::Normal
        } else if s.eq_ignore_ascii_case("nri") {
            SavingsVariant::Nri
        } else {
            SavingsVariant::Other(s.to_string())
        }
    }
}

/// Savings-specific account parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    pub variant: SavingsVariant,
}

impl SavingsAccount {
    pub fn new(variant: &str) -> Self {
        Self {
            variant: SavingsVariant::from(variant.trim()),
        }
    }

    /// Rate in percent for this variant
    pub fn rate(&self) -> Decimal {
        match self.variant {
            SavingsVariant::Normal => Decimal::new(40, 1),
            SavingsVariant::Nri => Decimal::new(60, 1),
            SavingsVariant::Other(_) => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Normal", SavingsVariant::Normal)]
    #[case("normal", SavingsVariant::Normal)]
    #[case("NORMAL", SavingsVariant::Normal)]
    #[case("NRI", SavingsVariant::Nri)]
    #[case("nri", SavingsVariant::Nri)]
    #[case("  Nri ", SavingsVariant::Nri)]
    #[case("Current", SavingsVariant::Other("Current".to_string()))]
    fn test_variant_matching(#[case] input: &str, #[case] expected: SavingsVariant) {
        assert_eq!(SavingsAccount::new(input).variant, expected);
    }

    #[rstest]
    #[case::normal("Normal", Decimal::new(4, 0))]
    #[case::nri("nri", Decimal::new(6, 0))]
    #[case::unknown_falls_back_to_zero("Premium", Decimal::ZERO)]
    #[case::empty_falls_back_to_zero("", Decimal::ZERO)]
    fn test_rate(#[case] variant: &str, #[case] expected: Decimal) {
        assert_eq!(SavingsAccount::new(variant).rate(), expected);
    }
}

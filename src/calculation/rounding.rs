//! Whole-unit currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to a whole currency unit, halves away from zero.
///
/// Every intermediate salary figure goes through this individually, so
/// rounding error compounds step by step rather than being applied once.
///
/// # Examples
///
/// ```
/// use hr_admin_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-3));
/// assert_eq!(round_currency(Decimal::from_str("41666.666").unwrap()), Decimal::from(41667));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

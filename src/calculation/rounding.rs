//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Every statutory figure the engine produces passes through this exactly
/// once, at the point the figure becomes final. Intermediate bracket
/// arithmetic stays unrounded.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("258.8196").unwrap();
/// assert_eq!(round_half_up(value), Decimal::from_str("258.82").unwrap());
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

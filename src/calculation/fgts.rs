//! FGTS severance fund deposit calculation.

use rust_decimal::Decimal;

use super::rounding::round_half_up;

/// Calculates the monthly FGTS deposit for a gross salary.
///
/// FGTS is employer-funded at a flat rate (8%) of gross. It never touches
/// the running taxable base and has no cap.
pub fn calculate_fgts(gross_salary: Decimal, rate: Decimal) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(gross_salary * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_rate_on_gross() {
        assert_eq!(calculate_fgts(dec("3000.00"), dec("0.08")), dec("240.00"));
    }

    #[test]
    fn test_no_cap_on_high_salaries() {
        assert_eq!(calculate_fgts(dec("25000.00"), dec("0.08")), dec("2000.00"));
    }

    #[test]
    fn test_deposit_is_rounded() {
        // 2577.33 * 8% = 206.1864 -> 206.19
        assert_eq!(calculate_fgts(dec("2577.33"), dec("0.08")), dec("206.19"));
    }

    #[test]
    fn test_zero_gross_deposits_nothing() {
        assert_eq!(calculate_fgts(Decimal::ZERO, dec("0.08")), Decimal::ZERO);
    }
}

//! Transport voucher cost-share calculation.

use rust_decimal::Decimal;

use super::rounding::round_half_up;

/// Calculates the employee's transport-voucher cost share.
///
/// The employee pays the lesser of the voucher value and the statutory
/// cap, a fixed fraction of gross salary (6%). The share is computed on
/// gross, never on the running taxable base, so transport never interacts
/// with the tax chain.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary for the month
/// * `voucher_value` - The monthly voucher value provided
/// * `cap_rate` - The cap fraction from the fiscal tables
///
/// # Returns
///
/// The cost share rounded to 2 decimal places, zero when the voucher
/// value is not positive.
pub fn calculate_transport_discount(
    gross_salary: Decimal,
    voucher_value: Decimal,
    cap_rate: Decimal,
) -> Decimal {
    if voucher_value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let cap = round_half_up(gross_salary * cap_rate);
    voucher_value.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_voucher_below_cap_charges_full_value() {
        // Cap is 3000 * 6% = 180.00; the 150.00 voucher is cheaper.
        assert_eq!(
            calculate_transport_discount(dec("3000.00"), dec("150.00"), dec("0.06")),
            dec("150.00")
        );
    }

    #[test]
    fn test_voucher_above_cap_charges_cap() {
        assert_eq!(
            calculate_transport_discount(dec("3000.00"), dec("250.00"), dec("0.06")),
            dec("180.00")
        );
    }

    #[test]
    fn test_voucher_exactly_at_cap() {
        assert_eq!(
            calculate_transport_discount(dec("3000.00"), dec("180.00"), dec("0.06")),
            dec("180.00")
        );
    }

    #[test]
    fn test_zero_voucher_value_charges_nothing() {
        assert_eq!(
            calculate_transport_discount(dec("3000.00"), Decimal::ZERO, dec("0.06")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_cap_is_rounded() {
        // 2500.55 * 6% = 150.033 -> 150.03
        assert_eq!(
            calculate_transport_discount(dec("2500.55"), dec("200.00"), dec("0.06")),
            dec("150.03")
        );
    }
}

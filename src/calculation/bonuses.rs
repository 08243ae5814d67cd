//! Salary bonus and benefit value calculations.
//!
//! Bonuses are computed before the discount pipeline runs and feed into
//! the gross salary. The meal voucher is the exception: it is granted on
//! top of pay and is informational only.

use rust_decimal::Decimal;

use crate::config::{FlatRates, UnhealthyRates};
use crate::models::{Employee, UnhealthyLevel};

use super::rounding::round_half_up;

/// Overtime is paid at one and a half times the hourly wage.
const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Weeks counted per month when deriving the hourly wage.
const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Derives the hourly wage from the contractual base salary.
///
/// Monthly hours are the weekly hours times five. A 44-hour week at a
/// base of 3000.00 yields 3000.00 / 220 = 13.64.
///
/// Returns zero for non-positive weekly hours rather than dividing by
/// zero.
pub fn hourly_wage(base_salary: Decimal, weekly_hours: Decimal) -> Decimal {
    if weekly_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(base_salary / (weekly_hours * WEEKS_PER_MONTH))
}

/// Calculates the hazard-pay premium: 30% of base salary when entitled.
pub fn hazard_bonus(employee: &Employee, rates: &FlatRates) -> Decimal {
    if !employee.hazard_pay {
        return Decimal::ZERO;
    }
    round_half_up(employee.base_salary * rates.hazard)
}

/// Calculates the unhealthy-work premium.
///
/// The premium is a severity-dependent fraction of the national minimum
/// wage, not of the employee's salary.
pub fn unhealthy_bonus(
    level: UnhealthyLevel,
    minimum_wage: Decimal,
    rates: &UnhealthyRates,
) -> Decimal {
    round_half_up(minimum_wage * rates.rate_for(level))
}

/// Calculates overtime pay from the hourly wage.
pub fn overtime_bonus(hourly: Decimal, overtime_hours: Option<Decimal>) -> Decimal {
    let hours = overtime_hours.unwrap_or(Decimal::ZERO);
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(hourly * OVERTIME_MULTIPLIER * hours)
}

/// Calculates the meal voucher value granted for the month.
///
/// Zero unless the employee opted in and both the daily rate and worked
/// days are present.
pub fn meal_voucher_value(employee: &Employee) -> Decimal {
    if !employee.meal_voucher {
        return Decimal::ZERO;
    }
    match (employee.meal_voucher_daily_rate, employee.worked_days) {
        (Some(rate), Some(days)) => round_half_up(rate * Decimal::from(days)),
        _ => Decimal::ZERO,
    }
}

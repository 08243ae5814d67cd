//! INSS social security contribution calculation.
//!
//! The contribution is progressive by marginal brackets: each bracket's
//! rate applies only to the slice of salary falling inside it. The summed
//! contribution is rounded once and then clamped to the yearly ceiling,
//! so salaries above the last bracket limit all contribute the ceiling
//! amount.

use rust_decimal::Decimal;

use crate::config::InssTable;

use super::rounding::round_half_up;

/// Calculates the INSS contribution for a gross salary.
///
/// # Arguments
///
/// * `salary` - The gross salary the contribution is assessed on
/// * `table` - The INSS bracket table for the reference year
///
/// # Returns
///
/// The contribution rounded to 2 decimal places and clamped to the table
/// ceiling. Zero for a non-positive salary.
///
/// # Example
///
/// 2024 tables: a salary of 3000.00 pays 7.5% on the first 1412.00 and
/// 9% on the remainder up to 2666.68, then 12% up to 3000.00, totalling
/// 258.82.
pub fn calculate_inss(salary: Decimal, table: &InssTable) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut contribution = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in &table.brackets {
        if salary <= lower {
            break;
        }
        let slice_top = salary.min(bracket.upper_limit);
        contribution += (slice_top - lower) * bracket.rate;
        lower = bracket.upper_limit;
    }

    let rounded = round_half_up(contribution);
    match table.ceiling {
        Some(ceiling) => rounded.min(ceiling),
        None => rounded,
    }
}

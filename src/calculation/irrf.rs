//! IRRF income tax withholding calculation.
//!
//! Withholding uses the tabulated deduction-parcel form: the base falls
//! into exactly one bracket and the tax is `base * rate - deduction`. The
//! parcels are tabulated consistent with the bracket bounds, so this is
//! equivalent to a marginal walk over the same brackets (the test suite
//! proves the equivalence over a wide sweep of bases).

use rust_decimal::Decimal;

use crate::config::IrrfTable;

use super::rounding::round_half_up;

/// Calculates the IRRF withholding for a taxable base.
///
/// # Arguments
///
/// * `taxable_base` - The base after earlier discounts in the pipeline
///   (INSS has already been taken out)
/// * `dependents` - Number of declared dependents
/// * `pension_alimony` - Court-ordered alimony, zero when none
/// * `table` - The IRRF table for the reference year
///
/// # Returns
///
/// The withholding rounded to 2 decimal places. Zero when the base, after
/// the dependent and alimony deductions, is at or below the exemption
/// threshold.
pub fn calculate_irrf(
    taxable_base: Decimal,
    dependents: u32,
    pension_alimony: Decimal,
    table: &IrrfTable,
) -> Decimal {
    let base =
        taxable_base - pension_alimony - Decimal::from(dependents) * table.dependent_deduction;

    if base <= table.exemption_threshold {
        return Decimal::ZERO;
    }

    // The loader guarantees a trailing catch-all bracket; the fallbacks
    // keep a degenerate table from panicking.
    let bracket = match table
        .brackets
        .iter()
        .find(|b| b.upper_limit.is_none_or(|limit| base <= limit))
        .or_else(|| table.brackets.last())
    {
        Some(bracket) => bracket,
        None => return Decimal::ZERO,
    };

    let tax = base * bracket.rate - bracket.deduction;
    round_half_up(tax.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IrrfBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table_2024() -> IrrfTable {
        IrrfTable {
            exemption_threshold: dec("2259.20"),
            dependent_deduction: dec("182.80"),
            brackets: vec![
                IrrfBracket {
                    upper_limit: Some(dec("1831.00")),
                    rate: dec("0"),
                    deduction: dec("0"),
                },
                IrrfBracket {
                    upper_limit: Some(dec("2929.00")),
                    rate: dec("0.075"),
                    deduction: dec("137.325"),
                },
                IrrfBracket {
                    upper_limit: Some(dec("4998.40")),
                    rate: dec("0.15"),
                    deduction: dec("357.00"),
                },
                IrrfBracket {
                    upper_limit: Some(dec("7500.00")),
                    rate: dec("0.225"),
                    deduction: dec("731.88"),
                },
                IrrfBracket {
                    upper_limit: None,
                    rate: dec("0.275"),
                    deduction: dec("1106.88"),
                },
            ],
        }
    }

    /// Marginal-walk twin of the parcel formula, used to prove the
    /// tabulated parcels are consistent with the bracket bounds.
    fn irrf_by_marginal_walk(
        taxable_base: Decimal,
        dependents: u32,
        pension_alimony: Decimal,
        table: &IrrfTable,
    ) -> Decimal {
        let base = taxable_base
            - pension_alimony
            - Decimal::from(dependents) * table.dependent_deduction;

        if base <= table.exemption_threshold {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for bracket in &table.brackets {
            let slice_top = match bracket.upper_limit {
                Some(limit) => base.min(limit),
                None => base,
            };
            if slice_top > lower {
                tax += (slice_top - lower) * bracket.rate;
            }
            match bracket.upper_limit {
                Some(limit) if base > limit => lower = limit,
                _ => break,
            }
        }
        round_half_up(tax.max(Decimal::ZERO))
    }

    #[test]
    fn test_withholding_without_dependents() {
        // Base 2741.18 (3000 gross less 258.82 INSS): 7.5% bracket.
        assert_eq!(
            calculate_irrf(dec("2741.18"), 0, Decimal::ZERO, &table_2024()),
            dec("68.26")
        );
    }

    #[test]
    fn test_dependents_reduce_withholding() {
        assert_eq!(
            calculate_irrf(dec("2741.18"), 2, Decimal::ZERO, &table_2024()),
            dec("40.84")
        );
    }

    #[test]
    fn test_enough_dependents_reach_exemption() {
        // 2741.18 - 3 * 182.80 = 2192.78, below the threshold.
        assert_eq!(
            calculate_irrf(dec("2741.18"), 3, Decimal::ZERO, &table_2024()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_high_base_falls_in_upper_bracket() {
        // Base 7091.15 (8000 gross less 908.85 INSS): 22.5% bracket.
        assert_eq!(
            calculate_irrf(dec("7091.15"), 0, Decimal::ZERO, &table_2024()),
            dec("863.63")
        );
    }

    #[test]
    fn test_base_exactly_at_exemption_threshold_is_exempt() {
        assert_eq!(
            calculate_irrf(dec("2259.20"), 0, Decimal::ZERO, &table_2024()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_pension_alimony_reduces_base() {
        // 2741.18 - 500.00 = 2241.18, below the threshold.
        assert_eq!(
            calculate_irrf(dec("2741.18"), 0, dec("500.00"), &table_2024()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_catch_all_bracket_above_last_bound() {
        // 10000.00 * 27.5% - 1106.88 = 1643.12
        assert_eq!(
            calculate_irrf(dec("10000.00"), 0, Decimal::ZERO, &table_2024()),
            dec("1643.12")
        );
    }

    #[test]
    fn test_negative_base_is_exempt() {
        assert_eq!(
            calculate_irrf(dec("100.00"), 5, Decimal::ZERO, &table_2024()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_parcel_formula_matches_marginal_walk_over_sweep() {
        // Whole-real sweep over [0, 20000]: the two formulations must
        // agree at every base, including every bracket boundary.
        let table = table_2024();
        for whole in 0..=20000u32 {
            let base = Decimal::from(whole);
            let by_parcel = calculate_irrf(base, 0, Decimal::ZERO, &table);
            let by_walk = irrf_by_marginal_walk(base, 0, Decimal::ZERO, &table);
            assert_eq!(by_parcel, by_walk, "divergence at base {}", base);
        }
    }

    #[test]
    fn test_formulations_agree_at_bracket_boundaries() {
        let table = table_2024();
        for boundary in ["1831.00", "2929.00", "4998.40", "7500.00"] {
            let base = dec(boundary);
            for offset in [dec("-0.01"), Decimal::ZERO, dec("0.01")] {
                let probe = base + offset;
                assert_eq!(
                    calculate_irrf(probe, 0, Decimal::ZERO, &table),
                    irrf_by_marginal_walk(probe, 0, Decimal::ZERO, &table),
                    "divergence at base {}",
                    probe
                );
            }
        }
    }
}

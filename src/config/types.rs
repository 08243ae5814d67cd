//! Fiscal table types.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from the year-versioned YAML files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::UnhealthyLevel;

/// A single INSS contribution bracket.
///
/// INSS brackets are marginal: the `rate` applies only to the slice of
/// salary between the previous bracket's upper limit and this one's.
#[derive(Debug, Clone, Deserialize)]
pub struct InssBracket {
    /// The upper salary limit of this bracket.
    pub upper_limit: Decimal,
    /// The marginal contribution rate applied within this bracket.
    pub rate: Decimal,
}

/// The INSS contribution table for one fiscal year.
#[derive(Debug, Clone, Deserialize)]
pub struct InssTable {
    /// The overall contribution ceiling, if one is defined for the year.
    pub ceiling: Option<Decimal>,
    /// The marginal brackets, ascending by upper limit.
    pub brackets: Vec<InssBracket>,
}

/// A single IRRF withholding bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfBracket {
    /// The upper taxable-base limit of this bracket. `None` marks the
    /// open-ended catch-all bracket, which must come last.
    pub upper_limit: Option<Decimal>,
    /// The withholding rate for a base that falls in this bracket.
    pub rate: Decimal,
    /// The fixed deduction parcel for this bracket.
    ///
    /// Tabulated exactly consistent with the bracket bounds, so that
    /// `base * rate - deduction` equals the sum of all lower marginal
    /// slices. Used as-is, never re-derived at runtime.
    pub deduction: Decimal,
}

/// The IRRF withholding table for one fiscal year.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfTable {
    /// Bases at or below this threshold (after dependent and alimony
    /// deductions) are fully exempt.
    pub exemption_threshold: Decimal,
    /// The deduction from the taxable base per declared dependent.
    pub dependent_deduction: Decimal,
    /// The brackets, ascending by upper limit, catch-all last.
    pub brackets: Vec<IrrfBracket>,
}

/// Unhealthy-work premium rates by severity level.
#[derive(Debug, Clone, Deserialize)]
pub struct UnhealthyRates {
    /// Premium rate for minimum-severity exposure.
    pub minimum: Decimal,
    /// Premium rate for medium-severity exposure.
    pub medium: Decimal,
    /// Premium rate for maximum-severity exposure.
    pub maximum: Decimal,
}

impl UnhealthyRates {
    /// Returns the premium rate for the given exposure level, zero for
    /// [`UnhealthyLevel::None`].
    pub fn rate_for(&self, level: UnhealthyLevel) -> Decimal {
        match level {
            UnhealthyLevel::None => Decimal::ZERO,
            UnhealthyLevel::Minimum => self.minimum,
            UnhealthyLevel::Medium => self.medium,
            UnhealthyLevel::Maximum => self.maximum,
        }
    }
}

/// Flat statutory rates for one fiscal year.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatRates {
    /// The employer-funded FGTS contribution rate (8%).
    pub fgts: Decimal,
    /// The transport-voucher cost-share cap as a fraction of gross salary
    /// (6%).
    pub transport_cap: Decimal,
    /// The hazard-pay premium rate applied to base salary (30%).
    pub hazard: Decimal,
    /// Unhealthy-work premium rates applied to the minimum wage.
    pub unhealthy: UnhealthyRates,
}

/// The complete fiscal table set for one year.
///
/// Loaded from a single YAML file under `config/tables/`; read-only after
/// load. Swapping to a new fiscal year's tables is a data change only and
/// never requires touching strategy logic.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTables {
    /// The fiscal year these tables apply to.
    pub year: i32,
    /// The national minimum wage for the year.
    pub minimum_wage: Decimal,
    /// The INSS contribution table.
    pub inss: InssTable,
    /// The IRRF withholding table.
    pub irrf: IrrfTable,
    /// Flat statutory rates.
    pub rates: FlatRates,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_unhealthy_rate_for_each_level() {
        let rates = UnhealthyRates {
            minimum: dec("0.10"),
            medium: dec("0.20"),
            maximum: dec("0.40"),
        };

        assert_eq!(rates.rate_for(UnhealthyLevel::None), Decimal::ZERO);
        assert_eq!(rates.rate_for(UnhealthyLevel::Minimum), dec("0.10"));
        assert_eq!(rates.rate_for(UnhealthyLevel::Medium), dec("0.20"));
        assert_eq!(rates.rate_for(UnhealthyLevel::Maximum), dec("0.40"));
    }

    #[test]
    fn test_irrf_bracket_deserializes_null_upper_limit_as_catch_all() {
        let yaml = r#"
upper_limit: null
rate: "0.275"
deduction: "1106.88"
"#;
        let bracket: IrrfBracket = serde_yaml::from_str(yaml).unwrap();
        assert!(bracket.upper_limit.is_none());
        assert_eq!(bracket.rate, dec("0.275"));
        assert_eq!(bracket.deduction, dec("1106.88"));
    }

    #[test]
    fn test_inss_table_deserializes_quoted_decimals() {
        let yaml = r#"
ceiling: "908.85"
brackets:
  - upper_limit: "1412.00"
    rate: "0.075"
  - upper_limit: "2666.68"
    rate: "0.09"
"#;
        let table: InssTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.ceiling, Some(dec("908.85")));
        assert_eq!(table.brackets.len(), 2);
        assert_eq!(table.brackets[0].upper_limit, dec("1412.00"));
        assert_eq!(table.brackets[1].rate, dec("0.09"));
    }
}

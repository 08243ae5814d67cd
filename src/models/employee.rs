//! Employee model and related types.
//!
//! This module defines the employee snapshot consumed from the directory
//! collaborator: contractual figures, dependents, and per-benefit flags
//! and values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity of unhealthy-work exposure.
///
/// Determines the premium applied to the minimum wage: 10% for minimum,
/// 20% for medium, 40% for maximum exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhealthyLevel {
    /// No unhealthy-work exposure; no premium is due.
    #[default]
    None,
    /// Minimum-severity exposure.
    Minimum,
    /// Medium-severity exposure.
    Medium,
    /// Maximum-severity exposure.
    Maximum,
}

/// The employee snapshot a payroll run is computed from.
///
/// Optional benefit inputs deliberately resolve to zero when absent
/// (defensive-zero); only the core salary figures are validated strictly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The contractual monthly base salary.
    pub base_salary: Decimal,
    /// The contractual weekly working hours.
    pub weekly_hours: Decimal,
    /// Number of declared dependents for IRRF purposes.
    #[serde(default)]
    pub dependents: u32,
    /// The date the employee was admitted.
    pub admission_date: NaiveDate,
    /// Court-ordered pension alimony deducted from the taxable base.
    #[serde(default)]
    pub pension_alimony: Option<Decimal>,
    /// Whether the employee opted into the transport voucher.
    #[serde(default)]
    pub transport_voucher: bool,
    /// The monthly transport voucher value provided.
    #[serde(default)]
    pub transport_voucher_value: Option<Decimal>,
    /// Whether the employee opted into the meal voucher.
    #[serde(default)]
    pub meal_voucher: bool,
    /// The meal voucher rate per worked day.
    #[serde(default)]
    pub meal_voucher_daily_rate: Option<Decimal>,
    /// Days worked in the reference month, for the meal voucher.
    #[serde(default)]
    pub worked_days: Option<u32>,
    /// Whether the employee is enrolled in the health plan.
    #[serde(default)]
    pub health_plan: bool,
    /// Whether the employee is enrolled in the dental plan.
    #[serde(default)]
    pub dental_plan: bool,
    /// Whether the employee is enrolled in the gym membership benefit.
    #[serde(default)]
    pub gym_membership: bool,
    /// Whether the employee is entitled to the hazard-pay premium.
    #[serde(default)]
    pub hazard_pay: bool,
    /// Unhealthy-work exposure level.
    #[serde(default)]
    pub unhealthy_level: UnhealthyLevel,
    /// Overtime hours worked in the reference month.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee declared at least one dependent.
    pub fn has_dependents(&self) -> bool {
        self.dependents > 0
    }

    /// The pension alimony to deduct from the taxable base, zero when
    /// absent.
    pub fn pension_alimony_or_zero(&self) -> Decimal {
        self.pension_alimony.unwrap_or(Decimal::ZERO)
    }
}

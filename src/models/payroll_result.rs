//! The persisted outcome of a payroll calculation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReferenceMonth;

/// The complete, itemized result of one payroll run.
///
/// Exactly one result exists per employee and reference month; repeating a
/// run for the same pair returns the stored result unchanged. All monetary
/// fields are rounded to 2 decimal places and serialize as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this result.
    pub id: Uuid,
    /// The employee the run was computed for.
    pub employee_id: String,
    /// The calendar month the run refers to.
    pub reference_month: ReferenceMonth,
    /// Base salary plus all earned bonuses.
    pub gross_salary: Decimal,
    /// The derived hourly wage, base salary over monthly hours.
    pub hourly_wage: Decimal,
    /// The hazard-pay premium, zero when not entitled.
    pub hazard_bonus: Decimal,
    /// The unhealthy-work premium, zero when not exposed.
    pub unhealthy_bonus: Decimal,
    /// Overtime pay at one and a half times the hourly wage.
    pub overtime_bonus: Decimal,
    /// The INSS social security contribution withheld.
    pub inss_discount: Decimal,
    /// The IRRF income tax withheld.
    pub irrf_discount: Decimal,
    /// The employee's transport-voucher cost share.
    pub transport_discount: Decimal,
    /// The employer-funded FGTS deposit for the month.
    pub fgts: Decimal,
    /// The meal voucher value granted. Informational, not part of the
    /// discount chain.
    pub meal_voucher: Decimal,
    /// Sum of all discounts applied against the gross salary.
    pub total_discounts: Decimal,
    /// Gross salary minus total discounts.
    pub net_salary: Decimal,
    /// When the result was computed.
    pub created_at: DateTime<Utc>,
    /// Who requested the run.
    pub created_by: String,
}

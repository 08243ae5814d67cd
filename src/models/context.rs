//! Shared calculation context for the discount pipeline.

use rust_decimal::Decimal;

use super::Employee;

/// Mutable state threaded through the discount strategies of one payroll
/// run.
///
/// The context is created fresh for every run and carries the gross salary
/// alongside the `running_taxable_base`, which starts equal to gross and is
/// reduced by each base-reducing discount in priority order. INSS runs
/// before IRRF precisely so that IRRF reads a base the INSS contribution
/// has already been taken out of.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CalculationContext, Employee, UnhealthyLevel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     base_salary: Decimal::from_str("3000.00").unwrap(),
///     weekly_hours: Decimal::from_str("44").unwrap(),
///     dependents: 0,
///     admission_date: NaiveDate::from_ymd_opt(2022, 5, 2).unwrap(),
///     pension_alimony: None,
///     transport_voucher: false,
///     transport_voucher_value: None,
///     meal_voucher: false,
///     meal_voucher_daily_rate: None,
///     worked_days: None,
///     health_plan: false,
///     dental_plan: false,
///     gym_membership: false,
///     hazard_pay: false,
///     unhealthy_level: UnhealthyLevel::None,
///     overtime_hours: None,
/// };
///
/// let gross = Decimal::from_str("3000.00").unwrap();
/// let mut context = CalculationContext::new(gross, &employee);
/// assert_eq!(context.running_taxable_base, gross);
///
/// context.apply_discount(Decimal::from_str("258.82").unwrap());
/// assert_eq!(context.running_taxable_base, Decimal::from_str("2741.18").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CalculationContext {
    /// The gross salary the run was started with. Never mutated.
    pub gross_salary: Decimal,
    /// The taxable base as seen by the next strategy in priority order.
    pub running_taxable_base: Decimal,
    /// Number of declared dependents.
    pub dependents: u32,
    /// Pension alimony, zero when the employee has none.
    pub pension_alimony: Decimal,
    /// Whether the employee opted into the transport voucher.
    pub transport_voucher: bool,
    /// The monthly transport voucher value, zero when absent.
    pub transport_voucher_value: Decimal,
}

impl CalculationContext {
    /// Creates the context for one payroll run.
    ///
    /// The running taxable base starts equal to the gross salary. Optional
    /// employee inputs resolve to zero when absent.
    pub fn new(gross_salary: Decimal, employee: &Employee) -> Self {
        Self {
            gross_salary,
            running_taxable_base: gross_salary,
            dependents: employee.dependents,
            pension_alimony: employee.pension_alimony_or_zero(),
            transport_voucher: employee.transport_voucher,
            transport_voucher_value: employee
                .transport_voucher_value
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// Reduces the running taxable base by a discount amount.
    ///
    /// Only strategies whose discount kind reduces the base call this.
    pub fn apply_discount(&mut self, amount: Decimal) {
        self.running_taxable_base -= amount;
    }
}

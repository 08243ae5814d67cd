//! The payroll run orchestrator.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DiscountKind, calculate_fgts, discount_pipeline, hazard_bonus, hourly_wage,
    meal_voucher_value, overtime_bonus, unhealthy_bonus,
};
use crate::config::TableLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationContext, PayrollResult, ReferenceMonth};

use super::store::{EmployeeDirectory, PayrollStore};

/// Orchestrates complete payroll runs.
///
/// One engine instance is shared across runs; each run gets its own
/// [`CalculationContext`], so concurrent calculations for different
/// employees never observe each other's state. Runs are idempotent per
/// employee and reference month: repeating a run returns the stored
/// result with identical values, id included.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::TableLoader;
/// use payroll_engine::engine::{InMemoryDirectory, InMemoryStore, PayrollEngine};
///
/// let tables = TableLoader::load("./config/tables").unwrap();
/// let engine = PayrollEngine::new(InMemoryDirectory::new(), InMemoryStore::new(), tables);
///
/// let result = engine.calculate("emp_001", "2024-03", "hr_portal").unwrap();
/// println!("net salary: {}", result.net_salary);
/// ```
pub struct PayrollEngine<D, S> {
    directory: D,
    store: S,
    tables: TableLoader,
}

impl<D: EmployeeDirectory, S: PayrollStore> PayrollEngine<D, S> {
    /// Creates an engine over the given collaborators and fiscal tables.
    pub fn new(directory: D, store: S, tables: TableLoader) -> Self {
        Self {
            directory,
            store,
            tables,
        }
    }

    /// Runs the full payroll calculation for one employee and month.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee to calculate for
    /// * `reference_month` - The month in `YYYY-MM` form
    /// * `requested_by` - Recorded on the result as its originator
    ///
    /// # Errors
    ///
    /// * `InvalidReferenceMonth` - the month string failed to parse
    /// * `EmployeeNotFound` - the directory has no such employee
    /// * `TablesNotFound` - no fiscal tables are loaded for the year
    /// * `InvalidGrossSalary` - the computed gross is not positive
    /// * `DiscountsExceedGross` - discounts reach or exceed gross
    pub fn calculate(
        &self,
        employee_id: &str,
        reference_month: &str,
        requested_by: &str,
    ) -> EngineResult<PayrollResult> {
        let month: ReferenceMonth = reference_month.parse()?;

        info!(employee_id, %month, "starting payroll calculation");

        if let Some(existing) = self.store.find(employee_id, &month)? {
            info!(employee_id, %month, result_id = %existing.id,
                "returning previously calculated payroll");
            return Ok(existing);
        }

        let employee = self
            .directory
            .find(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let tables = self.tables.tables_for_year(month.year())?;

        let hourly = hourly_wage(employee.base_salary, employee.weekly_hours);
        let hazard = hazard_bonus(&employee, &tables.rates);
        let unhealthy = unhealthy_bonus(
            employee.unhealthy_level,
            tables.minimum_wage,
            &tables.rates.unhealthy,
        );
        let overtime = overtime_bonus(hourly, employee.overtime_hours);
        let gross = employee.base_salary + hazard + unhealthy + overtime;

        let mut context = CalculationContext::new(gross, &employee);

        let mut mandatory = Decimal::ZERO;
        let mut inss = Decimal::ZERO;
        let mut irrf = Decimal::ZERO;
        let mut transport = Decimal::ZERO;
        for strategy in discount_pipeline() {
            let discount = strategy.apply(&mut context, tables);
            if discount.kind.is_mandatory() {
                mandatory += discount.amount;
            }
            match discount.kind {
                DiscountKind::Inss => inss = discount.amount,
                DiscountKind::Irrf => irrf = discount.amount,
                DiscountKind::TransportVoucher => transport = discount.amount,
            }
        }

        let fgts = calculate_fgts(gross, tables.rates.fgts);
        let meal_voucher = meal_voucher_value(&employee);
        let total_discounts = mandatory + transport + fgts;

        if gross <= Decimal::ZERO {
            warn!(employee_id, %month, %gross, "rejecting non-positive gross salary");
            return Err(EngineError::InvalidGrossSalary { amount: gross });
        }
        if total_discounts >= gross {
            warn!(employee_id, %month, %gross, %total_discounts,
                "rejecting calculation with non-positive net");
            return Err(EngineError::DiscountsExceedGross {
                gross,
                discounts: total_discounts,
            });
        }

        let result = PayrollResult {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            reference_month: month,
            gross_salary: gross,
            hourly_wage: hourly,
            hazard_bonus: hazard,
            unhealthy_bonus: unhealthy,
            overtime_bonus: overtime,
            inss_discount: inss,
            irrf_discount: irrf,
            transport_discount: transport,
            fgts,
            meal_voucher,
            total_discounts,
            net_salary: gross - total_discounts,
            created_at: Utc::now(),
            created_by: requested_by.to_string(),
        };

        self.store.insert(&result)?;

        info!(employee_id, %month, result_id = %result.id, net = %result.net_salary,
            "payroll calculation complete");

        Ok(result)
    }
}

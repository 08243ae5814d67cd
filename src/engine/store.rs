//! Persistence traits for the engine's collaborators.
//!
//! The engine looks up employees and stores results through these traits
//! rather than concrete backends. In-memory implementations live in the
//! sibling `memory` module; a database-backed implementation only has to
//! honor the same contracts, in particular the uniqueness constraint on
//! `(employee_id, reference_month)`.

use crate::error::EngineResult;
use crate::models::{Employee, PayrollResult, ReferenceMonth};

/// Read-only access to employee records.
pub trait EmployeeDirectory {
    /// Finds an employee by id.
    ///
    /// Returns `Ok(None)` when the id is unknown; errors are reserved for
    /// backend failures.
    fn find(&self, id: &str) -> EngineResult<Option<Employee>>;
}

/// Storage for computed payroll results.
///
/// Implementations must enforce at most one result per employee and
/// reference month.
pub trait PayrollStore {
    /// Finds the stored result for an employee and month, if any.
    fn find(
        &self,
        employee_id: &str,
        month: &ReferenceMonth,
    ) -> EngineResult<Option<PayrollResult>>;

    /// Inserts a new result.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCalculation` when a result for the same employee
    /// and month already exists. This is the backstop for two concurrent
    /// runs racing past the idempotency read.
    fn insert(&self, result: &PayrollResult) -> EngineResult<()>;
}

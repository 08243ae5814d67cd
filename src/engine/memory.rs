//! In-memory collaborator implementations.
//!
//! Useful for tests and for running the engine without external storage.
//! The store holds its map behind a mutex so the uniqueness check and the
//! insert happen atomically.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollResult, ReferenceMonth};

use super::store::{EmployeeDirectory, PayrollStore};

/// An employee directory backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<String, Employee>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, replacing any previous record with the same id.
    pub fn add(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn find(&self, id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(id).cloned())
    }
}

/// A payroll result store backed by a mutex-guarded `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    results: Mutex<HashMap<(String, ReferenceMonth), PayrollResult>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stored results.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no results.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(String, ReferenceMonth), PayrollResult>> {
        // A poisoned mutex means a panic mid-insert; the map itself is
        // still a consistent key-value snapshot.
        self.results
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PayrollStore for InMemoryStore {
    fn find(
        &self,
        employee_id: &str,
        month: &ReferenceMonth,
    ) -> EngineResult<Option<PayrollResult>> {
        let key = (employee_id.to_string(), *month);
        Ok(self.lock().get(&key).cloned())
    }

    fn insert(&self, result: &PayrollResult) -> EngineResult<()> {
        let key = (result.employee_id.clone(), result.reference_month);
        let mut results = self.lock();
        if results.contains_key(&key) {
            return Err(EngineError::DuplicateCalculation {
                employee_id: result.employee_id.clone(),
                month: result.reference_month,
            });
        }
        results.insert(key, result.clone());
        Ok(())
    }
}

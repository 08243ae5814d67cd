//! Payroll run orchestration and persistence seams.

mod memory;
mod orchestrator;
mod store;

pub use memory::{InMemoryDirectory, InMemoryStore};
pub use orchestrator::PayrollEngine;
pub use store::{EmployeeDirectory, PayrollStore};

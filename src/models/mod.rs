//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod context;
mod employee;
mod payroll_result;
mod reference_month;

pub use context::CalculationContext;
pub use employee::{Employee, UnhealthyLevel};
pub use payroll_result::PayrollResult;
pub use reference_month::ReferenceMonth;

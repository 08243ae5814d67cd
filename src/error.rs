//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll run.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::ReferenceMonth;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tables".to_string(),
/// };
/// assert_eq!(error.to_string(), "Fiscal table file not found: /missing/tables");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A fiscal table file or directory was not found at the specified path.
    #[error("Fiscal table file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A fiscal table file could not be parsed.
    #[error("Failed to parse fiscal table file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No fiscal tables are loaded for the requested year.
    #[error("No fiscal tables loaded for year {year}")]
    TablesNotFound {
        /// The fiscal year that was requested.
        year: i32,
    },

    /// The reference month string was not in `YYYY-MM` form.
    #[error("Invalid reference month '{value}': expected YYYY-MM")]
    InvalidReferenceMonth {
        /// The value that failed to parse.
        value: String,
    },

    /// The referenced employee does not exist in the directory.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// Gross salary was zero or negative; the calculation is rejected.
    #[error("Gross salary must be positive, got {amount}")]
    InvalidGrossSalary {
        /// The offending gross salary.
        amount: Decimal,
    },

    /// Total discounts reached or exceeded gross salary; the calculation
    /// is rejected rather than producing a non-positive net.
    #[error("Total discounts {discounts} reach or exceed gross salary {gross}")]
    DiscountsExceedGross {
        /// The gross salary for the run.
        gross: Decimal,
        /// The total discounts that were computed.
        discounts: Decimal,
    },

    /// A result for this employee and month already exists in the store.
    ///
    /// Surfaced when the uniqueness constraint rejects a concurrent
    /// duplicate insert.
    #[error("Payroll for employee '{employee_id}' in {month} already calculated")]
    DuplicateCalculation {
        /// The employee the duplicate was attempted for.
        employee_id: String,
        /// The reference month of the duplicate.
        month: ReferenceMonth,
    },

    /// A failure reported by a persistence collaborator.
    ///
    /// Propagated unchanged; retry policy belongs to the caller, not the
    /// engine.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

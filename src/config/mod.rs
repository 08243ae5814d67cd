//! Fiscal table loading and management for the payroll engine.
//!
//! This module provides functionality to load year-versioned fiscal tables
//! from YAML files: INSS and IRRF brackets, the per-dependent deduction, the
//! minimum wage, and the flat statutory rates (FGTS, transport cap, hazard,
//! unhealthy premiums).
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::TableLoader;
//!
//! let loader = TableLoader::load("./config/tables").unwrap();
//! let tables = loader.tables_for_year(2024).unwrap();
//! println!("Minimum wage: {}", tables.minimum_wage);
//! ```

mod loader;
mod types;

pub use loader::TableLoader;
pub use types::{
    FlatRates, InssBracket, InssTable, IrrfBracket, IrrfTable, TaxTables, UnhealthyRates,
};

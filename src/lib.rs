//! Statutory payroll calculation engine for Brazilian employment.
//!
//! This crate computes the monthly payroll result for a single employee:
//! gross pay, mandatory deductions (INSS social-security contribution and
//! IRRF income-tax withholding), the employer-funded FGTS contribution,
//! benefit cost-shares (transport and meal vouchers), and statutory bonuses
//! (hazard and unhealthy-work premiums, overtime).
//!
//! The heart of the crate is the discount pipeline: an ordered chain of
//! progressive-bracket strategies that share a mutable taxable base, so the
//! INSS contribution shrinks the base the IRRF withholding is computed on.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

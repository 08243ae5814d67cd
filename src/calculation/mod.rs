//! Statutory pay calculation logic.
//!
//! This module contains the individual calculation functions (INSS, IRRF,
//! FGTS, transport voucher, bonuses) and the priority-ordered discount
//! pipeline that strings them together.

mod bonuses;
mod fgts;
mod inss;
mod irrf;
mod rounding;
mod strategy;
mod transport_voucher;

pub use bonuses::{hazard_bonus, hourly_wage, meal_voucher_value, overtime_bonus, unhealthy_bonus};
pub use fgts::calculate_fgts;
pub use inss::calculate_inss;
pub use irrf::calculate_irrf;
pub use rounding::round_half_up;
pub use strategy::{Discount, DiscountKind, DiscountStrategy, discount_pipeline};
pub use transport_voucher::calculate_transport_discount;

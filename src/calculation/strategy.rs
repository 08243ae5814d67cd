//! Discount strategies and the priority-ordered pipeline.
//!
//! Each statutory discount is one variant of [`DiscountStrategy`]. The
//! pipeline is the fixed set of strategies sorted once by priority; the
//! orchestrator runs them in order against a shared
//! [`CalculationContext`], so later strategies observe the taxable base
//! left behind by earlier ones.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::CalculationContext;

use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::transport_voucher::calculate_transport_discount;

/// The statutory kind of a discount.
///
/// Kinds carry the routing tags downstream code keys on: whether the
/// discount is mandatory and whether it reduces the taxable base for
/// later strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountKind {
    /// INSS social security contribution.
    Inss,
    /// IRRF income tax withholding.
    Irrf,
    /// Transport voucher cost share.
    TransportVoucher,
}

impl DiscountKind {
    /// Whether this discount applies regardless of employee opt-in.
    pub fn is_mandatory(&self) -> bool {
        match self {
            Self::Inss | Self::Irrf => true,
            Self::TransportVoucher => false,
        }
    }

    /// Whether this discount reduces the running taxable base for
    /// strategies that come after it.
    pub fn reduces_taxable_base(&self) -> bool {
        match self {
            Self::Inss | Self::Irrf => true,
            Self::TransportVoucher => false,
        }
    }
}

/// One applied discount: its kind and the amount withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount {
    /// The statutory kind of the discount.
    pub kind: DiscountKind,
    /// The amount withheld, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// A discount strategy in the payroll pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountStrategy {
    /// INSS contribution, assessed on gross.
    Inss,
    /// IRRF withholding, assessed on the running taxable base.
    Irrf,
    /// Transport voucher cost share, assessed on gross.
    TransportVoucher,
}

impl DiscountStrategy {
    /// The execution priority of this strategy. Lower runs first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Inss => 1,
            Self::Irrf => 2,
            Self::TransportVoucher => 3,
        }
    }

    /// The kind of discount this strategy produces.
    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Inss => DiscountKind::Inss,
            Self::Irrf => DiscountKind::Irrf,
            Self::TransportVoucher => DiscountKind::TransportVoucher,
        }
    }

    /// Applies this strategy against the shared context.
    ///
    /// Computes the discount amount, reduces the running taxable base
    /// when the kind calls for it, and returns the applied discount.
    pub fn apply(&self, context: &mut CalculationContext, tables: &TaxTables) -> Discount {
        let amount = match self {
            Self::Inss => calculate_inss(context.gross_salary, &tables.inss),
            Self::Irrf => calculate_irrf(
                context.running_taxable_base,
                context.dependents,
                context.pension_alimony,
                &tables.irrf,
            ),
            Self::TransportVoucher => {
                if context.transport_voucher {
                    calculate_transport_discount(
                        context.gross_salary,
                        context.transport_voucher_value,
                        tables.rates.transport_cap,
                    )
                } else {
                    Decimal::ZERO
                }
            }
        };

        let kind = self.kind();
        if kind.reduces_taxable_base() {
            context.apply_discount(amount);
        }

        Discount { kind, amount }
    }
}

/// Returns the full pipeline, sorted by priority.
///
/// The set is fixed: every statutory discount participates in every run
/// and decides for itself whether it amounts to zero.
pub fn discount_pipeline() -> [DiscountStrategy; 3] {
    let mut pipeline = [
        DiscountStrategy::Irrf,
        DiscountStrategy::TransportVoucher,
        DiscountStrategy::Inss,
    ];
    pipeline.sort_by_key(|s| s.priority());
    pipeline
}

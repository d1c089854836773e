//! Shared aggregation output value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full per-period expense breakdown.
///
/// Produced by both the raw-ledger aggregator and the settlement-report
/// reconciler. Immutable after construction; safe to cache externally by
/// (seller, period) key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBreakdown {
    /// Total sale revenue (net of returns/cancels for settlement data).
    pub revenue: Decimal,
    /// Amount the marketplace remits to the seller.
    pub for_pay: Decimal,
    /// Marketplace commission. Derived by the reconciler, computed from
    /// per-product rates by the aggregator.
    pub commission: Decimal,
    /// Outbound delivery cost.
    pub logistics: Decimal,
    /// Return-leg delivery cost.
    pub return_logistics: Decimal,
    /// Storage charges.
    pub storage: Decimal,
    /// Acceptance charges.
    pub acceptance: Decimal,
    /// Penalties levied by the marketplace.
    pub penalty: Decimal,
    /// Withheld amounts, typically advertising spend.
    pub advertising: Decimal,
    /// Positive adjustments credited back (bonuses, corrections).
    pub other_adjustments: Decimal,
    /// Revenue of returned units, tracked separately from `revenue`.
    pub return_revenue: Decimal,
    /// Commission attributable to returned units.
    pub return_commission: Decimal,
    /// Sum of commission plus every expense bucket above.
    pub total_expenses: Decimal,
    /// Number of sale events/rows.
    pub sales_count: u64,
    /// Number of return events/rows.
    pub returns_count: u64,
    /// Number of cancellation events/rows.
    pub cancels_count: u64,
}

impl AggregatedBreakdown {
    /// Sum of every expense bucket excluding commission.
    #[must_use]
    pub fn disclosed_expenses(&self) -> Decimal {
        self.logistics
            + self.return_logistics
            + self.storage
            + self.acceptance
            + self.penalty
            + self.advertising
            + self.other_adjustments
    }

    /// Net amount left to the seller after all marketplace expenses.
    #[must_use]
    pub fn net_of_expenses(&self) -> Decimal {
        self.revenue - self.total_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_disclosed_expenses_excludes_commission() {
        let breakdown = AggregatedBreakdown {
            revenue: dec!(1000),
            commission: dec!(130),
            logistics: dec!(100),
            storage: dec!(18),
            acceptance: dec!(2),
            advertising: dec!(50),
            ..Default::default()
        };

        assert_eq!(breakdown.disclosed_expenses(), dec!(170));
    }

    #[test]
    fn test_net_of_expenses() {
        let breakdown = AggregatedBreakdown {
            revenue: dec!(1000),
            total_expenses: dec!(300),
            ..Default::default()
        };

        assert_eq!(breakdown.net_of_expenses(), dec!(700));
    }
}

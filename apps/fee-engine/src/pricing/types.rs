//! Input and result types for the price solver.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Input parameters for the price solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceInput {
    /// Purchase/production cost per unit.
    pub cost_price: Decimal,
    /// Marketplace commission as a percentage of sale price.
    pub commission_rate_pct: Decimal,
    /// Tax as a percentage of net revenue before tax.
    pub tax_rate_pct: Decimal,
    /// Blended logistics cost per successful order.
    pub logistics_per_order: Decimal,
    /// Desired net margin as a percentage of sale price.
    pub target_margin_pct: Decimal,
    /// Storage charge as a fraction of sale price.
    pub storage_rate: Decimal,
    /// Acceptance charge as a fraction of sale price.
    pub acceptance_rate: Decimal,
    /// Starting guess, typically the current price. Falls back to the cost
    /// price when absent.
    pub initial_price: Option<Decimal>,
}

impl Default for PriceInput {
    fn default() -> Self {
        Self {
            cost_price: Decimal::ZERO,
            commission_rate_pct: Decimal::ZERO,
            tax_rate_pct: Decimal::ZERO,
            logistics_per_order: Decimal::ZERO,
            target_margin_pct: Decimal::ZERO,
            storage_rate: dec!(0.0179),    // 1.79%
            acceptance_rate: dec!(0.0022), // 0.22%
            initial_price: None,
        }
    }
}

/// Full cost breakdown at a given sale price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The sale price this breakdown was computed at.
    pub price: Decimal,
    /// Commission at that price.
    pub commission: Decimal,
    /// Storage charge at that price.
    pub storage: Decimal,
    /// Acceptance charge at that price.
    pub acceptance: Decimal,
    /// Logistics cost per successful order.
    pub logistics: Decimal,
    /// Price minus commission, storage, acceptance and logistics.
    pub net_revenue_before_tax: Decimal,
    /// Tax on net revenue.
    pub tax: Decimal,
    /// Net profit after tax and cost price.
    pub net_profit: Decimal,
    /// Net profit as a percentage of price.
    pub margin_pct: Decimal,
}

/// Result of a price-solving run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSolution {
    /// Solved price rounded up to the nearest 10 currency units.
    pub recommended_price: Decimal,
    /// Solved price before rounding; its margin satisfies the tolerance
    /// when `converged` is true.
    pub raw_price: Decimal,
    /// Cost breakdown recomputed at `recommended_price`.
    pub breakdown: PriceBreakdown,
    /// Margin achieved at `raw_price`.
    pub margin_at_raw_pct: Decimal,
    /// False when the iteration cap was reached before the margin settled;
    /// the prices are then the last approximation, still usable.
    pub converged: bool,
    /// Iterations performed.
    pub iterations: u32,
}

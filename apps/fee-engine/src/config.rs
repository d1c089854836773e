//! Engine-wide fee constants and defaults.
//!
//! Everything is passed explicitly per call; the engine never reads ambient
//! or global configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fee constants shared by the aggregator, reconciler and price solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Storage charge as a fraction of sale price (price-based components).
    pub storage_rate: Decimal,
    /// Acceptance charge as a fraction of sale price.
    pub acceptance_rate: Decimal,
    /// Flat storage charge per unit for raw-ledger aggregation.
    pub storage_per_unit: Decimal,
    /// Flat acceptance charge per unit for raw-ledger aggregation.
    pub acceptance_per_unit: Decimal,
    /// Flat return-leg logistics charge per returned unit, used when the
    /// settlement report does not disclose an actual figure.
    pub return_logistics_per_unit: Decimal,
    /// Maximum acceptable residual when checking the balance identity
    /// `revenue - expenses = forPay`.
    pub conservation_tolerance: Decimal,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            storage_rate: dec!(0.0179),      // 1.79%
            acceptance_rate: dec!(0.0022),   // 0.22%
            storage_per_unit: dec!(5),
            acceptance_per_unit: dec!(1.5),
            return_logistics_per_unit: dec!(50),
            conservation_tolerance: dec!(0.01),
        }
    }
}

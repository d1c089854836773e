//! Error types for price optimization.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error during price solving.
///
/// These are configuration errors: the math is undefined for the given
/// inputs and must be rejected before iterating. Data-quality fallbacks
/// elsewhere in the engine never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Fractional rates consume the whole price, so no positive price can
    /// satisfy the target margin.
    #[error(
        "commission + storage + acceptance + tax + margin rates sum to {total}, must be below 1"
    )]
    RatesExceedPrice {
        /// Sum of all fractional rates including the target margin.
        total: Decimal,
    },

    /// Invalid input (non-positive cost price, negative rate, etc.).
    #[error("invalid pricing input: {0}")]
    InvalidInput(String),

    /// Buyout rate outside (0, 1]; the blended-logistics denominator would
    /// be non-positive.
    #[error("buyout rate {rate} must be in (0, 1]")]
    InvalidBuyoutRate {
        /// The rejected rate.
        rate: Decimal,
    },
}

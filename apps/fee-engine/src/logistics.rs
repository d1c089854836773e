//! Volumetric delivery cost calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::tariff::tier_cost;

/// Default volume for parcels with missing dimensions.
const DEFAULT_VOLUME_LITERS: Decimal = Decimal::ONE;

/// Parcel dimensions as reported per transaction.
///
/// Any dimension may be missing in upstream data; volume falls back to one
/// liter in that case. Immutable, constructed per transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelDimensions {
    /// Length in centimeters.
    pub length_cm: Option<Decimal>,
    /// Width in centimeters.
    pub width_cm: Option<Decimal>,
    /// Height in centimeters.
    pub height_cm: Option<Decimal>,
    /// Weight in grams, informational only.
    pub weight_g: Option<Decimal>,
}

impl ParcelDimensions {
    /// Dimensions with all three sides known.
    #[must_use]
    pub const fn new(length_cm: Decimal, width_cm: Decimal, height_cm: Decimal) -> Self {
        Self {
            length_cm: Some(length_cm),
            width_cm: Some(width_cm),
            height_cm: Some(height_cm),
            weight_g: None,
        }
    }

    /// Parcel volume in liters: l x w x h / 1000.
    ///
    /// Falls back to one liter when any dimension is missing.
    #[must_use]
    pub fn volume_liters(&self) -> Decimal {
        match (self.length_cm, self.width_cm, self.height_cm) {
            (Some(l), Some(w), Some(h)) => l * w * h / dec!(1000),
            _ => DEFAULT_VOLUME_LITERS,
        }
    }
}

/// Delivery cost for a known volume under a warehouse coefficient.
///
/// `ktr` is the warehouse delivery coefficient as a multiplier; non-positive
/// values are treated as the neutral coefficient of 1 (the default for an
/// unknown warehouse).
#[must_use]
pub fn delivery_cost(volume_liters: Decimal, ktr: Decimal) -> Decimal {
    let ktr = if ktr <= Decimal::ZERO { Decimal::ONE } else { ktr };
    tier_cost(volume_liters) * ktr
}

/// Delivery cost for a parcel, deriving the volume from its dimensions.
///
/// Used when a transaction does not carry a pre-computed delivery cost.
#[must_use]
pub fn delivery_cost_for(dimensions: &ParcelDimensions, ktr: Decimal) -> Decimal {
    delivery_cost(dimensions.volume_liters(), ktr)
}

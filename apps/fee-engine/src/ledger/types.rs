//! Raw ledger event types and product metadata.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::logistics::ParcelDimensions;

/// Kind of ledger event. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A completed sale.
    Sale,
    /// A buyer return.
    Return,
    /// A cancellation before shipment.
    Cancel,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => write!(f, "SALE"),
            Self::Return => write!(f, "RETURN"),
            Self::Cancel => write!(f, "CANCEL"),
        }
    }
}

/// One order-level event from the seller's raw ledger.
///
/// Exactly one of `delivery_cost` (known actual) or `dimensions` plus a
/// tariff lookup is used to price outbound logistics; a known cost wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Marketplace item id.
    pub item_id: i64,
    /// Units in the event. Always positive.
    pub quantity: u32,
    /// Price paid by the buyer per unit.
    pub unit_price: Decimal,
    /// Event kind.
    pub kind: EventKind,
    /// Parcel dimensions, when the transaction carries them.
    pub dimensions: Option<ParcelDimensions>,
    /// Actual delivery cost, when disclosed for this order.
    pub delivery_cost: Option<Decimal>,
    /// Shipping warehouse, for the KTR lookup.
    pub warehouse: Option<String>,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Per-product cost and commission metadata, keyed by item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Commission rate as a percentage of revenue.
    pub commission_percent: Decimal,
    /// Purchase/production cost per unit.
    pub cost_price: Decimal,
}

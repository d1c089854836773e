//! Per-warehouse tariff rates and coefficient lookup.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Delivery and storage rates for a single warehouse.
///
/// Supplied by the external tariff source; valid until [`Self::valid_until`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseTariff {
    /// Warehouse name, the lookup key.
    pub warehouse_name: String,
    /// Base delivery rate for marketplace-warehoused stock.
    pub delivery_base: Decimal,
    /// Per-liter delivery rate for marketplace-warehoused stock.
    pub delivery_liter: Decimal,
    /// Delivery coefficient (KTR) as an integer percentage, e.g. 125 = 1.25x.
    pub ktr_percent: i64,
    /// Base delivery rate for seller-fulfilled (marketplace pass-through) stock.
    pub marketplace_delivery_base: Decimal,
    /// Per-liter delivery rate for seller-fulfilled stock.
    pub marketplace_delivery_liter: Decimal,
    /// Base storage rate per unit per day.
    pub storage_base: Decimal,
    /// Per-liter storage rate per day.
    pub storage_liter: Decimal,
    /// Expiry of this tariff snapshot.
    pub valid_until: Option<DateTime<Utc>>,
}

impl WarehouseTariff {
    /// Delivery coefficient as a multiplier.
    ///
    /// The source stores it as an integer percentage; non-positive values
    /// fall back to the neutral coefficient of 1.
    #[must_use]
    pub fn ktr(&self) -> Decimal {
        if self.ktr_percent <= 0 {
            Decimal::ONE
        } else {
            Decimal::from(self.ktr_percent) / Decimal::ONE_HUNDRED
        }
    }

    /// Whether the tariff snapshot has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|until| now > until)
    }
}

/// Read-only map from warehouse name to its tariff rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffTable {
    tariffs: HashMap<String, WarehouseTariff>,
}

impl TariffTable {
    /// Build a table from a tariff snapshot.
    #[must_use]
    pub fn new(tariffs: impl IntoIterator<Item = WarehouseTariff>) -> Self {
        Self {
            tariffs: tariffs
                .into_iter()
                .map(|t| (t.warehouse_name.clone(), t))
                .collect(),
        }
    }

    /// Tariff entry for a warehouse, if known.
    #[must_use]
    pub fn get(&self, warehouse: &str) -> Option<&WarehouseTariff> {
        self.tariffs.get(warehouse)
    }

    /// Delivery coefficient for a warehouse.
    ///
    /// A missing entry means "use the neutral coefficient": unknown
    /// warehouses price at 1x rather than failing.
    #[must_use]
    pub fn ktr(&self, warehouse: &str) -> Decimal {
        self.tariffs
            .get(warehouse)
            .map_or(Decimal::ONE, WarehouseTariff::ktr)
    }

    /// Number of warehouses in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    /// Whether the table holds no tariffs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

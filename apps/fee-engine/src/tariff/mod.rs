//! Delivery tariffs: the tiered per-liter rate table and the per-warehouse
//! coefficient (KTR) store.
//!
//! Tariff data is read-only reference data supplied by an external tariff
//! source and valid until a stated expiry; the engine only reads it.

mod tiers;
mod warehouse;

pub use tiers::tier_cost;
pub use warehouse::{TariffTable, WarehouseTariff};

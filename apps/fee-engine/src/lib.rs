// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Fee Engine - Rust Core Library
//!
//! Deterministic fee reconciliation and tariff engine for marketplace
//! sellers. Everything here is pure computation over explicitly-passed
//! inputs: no I/O, no global state, safe to call concurrently.
//!
//! # Components
//!
//! - [`tariff`]: tiered per-liter delivery rate table and per-warehouse
//!   coefficient (KTR) lookup
//! - [`logistics`]: volumetric delivery cost from parcel dimensions
//! - [`ledger`]: sales aggregation over raw order/return/cancel events
//! - [`settlement`]: expense reconciliation over official settlement-report
//!   rows, deriving the undisclosed commission from the balance identity
//!   `revenue = forPay + expenses`
//! - [`pricing`]: bounded fixed-point solver for the sale price that hits a
//!   target net margin, plus buyout-adjusted logistics
//!
//! All monetary values are [`rust_decimal::Decimal`]; the engine never uses
//! floating point for currency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod breakdown;
pub mod config;
pub mod ledger;
pub mod logistics;
pub mod pricing;
pub mod settlement;
pub mod tariff;

pub use breakdown::AggregatedBreakdown;
pub use config::FeeConfig;
pub use ledger::{EventKind, LedgerEvent, ProductInfo, SalesAggregator, SalesReport};
pub use logistics::{ParcelDimensions, delivery_cost, delivery_cost_for};
pub use pricing::{PriceBreakdown, PriceInput, PriceSolution, PricingError};
pub use settlement::{
    ConservationCheck, DocumentKind, ExpenseReconciler, ReconciliationReport, SettlementLineItem,
};
pub use tariff::{TariffTable, WarehouseTariff, tier_cost};

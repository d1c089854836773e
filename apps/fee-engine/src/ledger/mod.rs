//! Sales aggregation over raw order/return/cancel events.
//!
//! This is the per-order view of a seller's activity, priced from product
//! metadata and delivery tariffs. The official settlement report is a
//! different input shape entirely and is handled by [`crate::settlement`];
//! the two are not interchangeable.

mod aggregator;
mod types;

pub use aggregator::{EventLine, SalesAggregator, SalesReport};
pub use types::{EventKind, LedgerEvent, ProductInfo};

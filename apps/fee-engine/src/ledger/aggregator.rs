//! Walks a raw event ledger into an audited per-category breakdown.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{EventKind, LedgerEvent, ProductInfo};
use crate::breakdown::AggregatedBreakdown;
use crate::config::FeeConfig;
use crate::logistics::delivery_cost_for;
use crate::tariff::TariffTable;

/// Priced result for a single ledger event, retained for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLine {
    /// Marketplace item id.
    pub item_id: i64,
    /// Event kind.
    pub kind: EventKind,
    /// Units in the event.
    pub quantity: u32,
    /// Revenue for the event (unit price x quantity).
    pub revenue: Decimal,
    /// Commission at the product's rate.
    pub commission: Decimal,
    /// Logistics charge: outbound for sales, return-leg for returns.
    pub logistics: Decimal,
    /// Flat storage charge.
    pub storage: Decimal,
    /// Flat acceptance charge.
    pub acceptance: Decimal,
}

/// Output of [`SalesAggregator::aggregate`]: running totals plus every
/// per-event line, so a caller can audit any single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Per-event audit lines, in input order.
    pub lines: Vec<EventLine>,
    /// Accumulated totals.
    pub breakdown: AggregatedBreakdown,
}

/// Aggregates raw ledger events into a per-category breakdown.
///
/// Deterministic given identical inputs and lookup data; no side effects
/// beyond building the result.
#[derive(Debug, Clone, Default)]
pub struct SalesAggregator {
    config: FeeConfig,
}

impl SalesAggregator {
    /// Create an aggregator with custom fee constants.
    #[must_use]
    pub const fn new(config: FeeConfig) -> Self {
        Self { config }
    }

    /// Aggregate a batch of ledger events.
    ///
    /// Products missing from the lookup are priced at zero commission;
    /// missing dimensions and unknown warehouses fall back to the documented
    /// defaults (one liter, neutral KTR).
    #[must_use]
    pub fn aggregate(
        &self,
        events: &[LedgerEvent],
        products: &HashMap<i64, ProductInfo>,
        tariffs: &TariffTable,
    ) -> SalesReport {
        let mut breakdown = AggregatedBreakdown::default();
        let mut lines = Vec::with_capacity(events.len());

        for event in events {
            let line = self.price_event(event, products, tariffs);

            match event.kind {
                EventKind::Sale => {
                    breakdown.revenue += line.revenue;
                    breakdown.commission += line.commission;
                    breakdown.logistics += line.logistics;
                    breakdown.storage += line.storage;
                    breakdown.acceptance += line.acceptance;
                    breakdown.sales_count += 1;
                }
                EventKind::Return => {
                    // Returned revenue and commission are tracked in parallel
                    // counters, never added to the sale totals.
                    breakdown.return_logistics += line.logistics;
                    breakdown.return_revenue += line.revenue;
                    breakdown.return_commission += line.commission;
                    breakdown.returns_count += 1;
                }
                EventKind::Cancel => {
                    // Cancellations before shipment carry no handling cost.
                    breakdown.cancels_count += 1;
                }
            }

            lines.push(line);
        }

        breakdown.total_expenses = breakdown.commission + breakdown.disclosed_expenses();
        breakdown.for_pay = breakdown.revenue - breakdown.total_expenses;

        debug!(
            events = events.len(),
            sales = breakdown.sales_count,
            returns = breakdown.returns_count,
            cancels = breakdown.cancels_count,
            revenue = %breakdown.revenue,
            expenses = %breakdown.total_expenses,
            "aggregated ledger batch"
        );

        SalesReport { lines, breakdown }
    }

    fn price_event(
        &self,
        event: &LedgerEvent,
        products: &HashMap<i64, ProductInfo>,
        tariffs: &TariffTable,
    ) -> EventLine {
        let quantity = Decimal::from(event.quantity);
        let revenue = event.unit_price * quantity;
        let commission_rate = products
            .get(&event.item_id)
            .map_or(Decimal::ZERO, |p| p.commission_percent);
        let commission = revenue * commission_rate / Decimal::ONE_HUNDRED;

        let (logistics, storage, acceptance) = match event.kind {
            EventKind::Sale => {
                let logistics = event
                    .delivery_cost
                    .unwrap_or_else(|| self.volumetric_cost(event, tariffs));
                (
                    logistics,
                    self.config.storage_per_unit * quantity,
                    self.config.acceptance_per_unit * quantity,
                )
            }
            EventKind::Return => (
                self.config.return_logistics_per_unit * quantity,
                Decimal::ZERO,
                Decimal::ZERO,
            ),
            EventKind::Cancel => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        };

        EventLine {
            item_id: event.item_id,
            kind: event.kind,
            quantity: event.quantity,
            revenue,
            commission,
            logistics,
            storage,
            acceptance,
        }
    }

    fn volumetric_cost(&self, event: &LedgerEvent, tariffs: &TariffTable) -> Decimal {
        let dimensions = event.dimensions.unwrap_or_default();
        let ktr = event
            .warehouse
            .as_deref()
            .map_or(Decimal::ONE, |w| tariffs.ktr(w));
        delivery_cost_for(&dimensions, ktr) * Decimal::from(event.quantity)
    }
}

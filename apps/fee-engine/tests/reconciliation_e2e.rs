//! End-to-end scenarios: tariff lookup -> aggregation/reconciliation ->
//! price solving, exercised through the public API only.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fee_engine::pricing::{self, PriceInput};
use fee_engine::{
    DocumentKind, EventKind, ExpenseReconciler, LedgerEvent, ParcelDimensions, ProductInfo,
    SalesAggregator, SettlementLineItem, TariffTable, WarehouseTariff, delivery_cost, tier_cost,
};

fn koledino(ktr_percent: i64) -> WarehouseTariff {
    WarehouseTariff {
        warehouse_name: "Koledino".to_string(),
        delivery_base: dec!(46),
        delivery_liter: dec!(14),
        ktr_percent,
        marketplace_delivery_base: dec!(40),
        marketplace_delivery_liter: dec!(12),
        storage_base: dec!(0.14),
        storage_liter: dec!(0.07),
        valid_until: None,
    }
}

#[test]
fn small_parcel_logistics_at_neutral_coefficient() {
    // 0.15 L at 23 per liter, KTR 1.
    assert_eq!(delivery_cost(dec!(0.15), Decimal::ONE), dec!(3.45));
}

#[test]
fn oversize_parcel_logistics() {
    // 1.5 L: 46 for the first liter plus half a liter at 14.
    assert_eq!(tier_cost(dec!(1.5)), dec!(53));
}

#[test]
fn commission_derived_from_settlement_batch() {
    let row = SettlementLineItem {
        kind: DocumentKind::Sale,
        doc_label: "Продажа".to_string(),
        quantity: 1,
        retail_price: dec!(1000),
        for_pay: dec!(700),
        delivery_cost: dec!(100),
        storage_cost: dec!(18),
        acceptance_cost: dec!(2),
        additional_payment: dec!(-50),
        ..Default::default()
    };

    let report = ExpenseReconciler::default().reconcile(&[row]);

    assert_eq!(report.breakdown.commission, dec!(130));
    assert!(report.conservation.reconciled);
}

#[test]
fn solver_hits_target_margin_and_rounds_up() {
    let input = PriceInput {
        cost_price: dec!(200),
        commission_rate_pct: dec!(15),
        tax_rate_pct: dec!(6),
        logistics_per_order: dec!(60),
        target_margin_pct: dec!(30),
        ..Default::default()
    };

    let solution = pricing::solve(&input).unwrap();

    assert!(solution.converged);
    assert!((solution.margin_at_raw_pct - dec!(30)).abs() < dec!(0.1));
    assert_eq!(solution.recommended_price % dec!(10), Decimal::ZERO);
    // True 30%-margin price sits near 534; rounded up to the next 10.
    assert_eq!(solution.recommended_price, dec!(540));
}

#[test]
fn full_flow_from_ledger_to_recommended_price() {
    let tariffs = TariffTable::new([koledino(125)]);
    let products = HashMap::from([(
        42,
        ProductInfo {
            commission_percent: dec!(15),
            cost_price: dec!(200),
        },
    )]);

    let events = vec![
        LedgerEvent {
            item_id: 42,
            quantity: 3,
            unit_price: dec!(550),
            kind: EventKind::Sale,
            dimensions: Some(ParcelDimensions::new(dec!(20), dec!(15), dec!(10))),
            delivery_cost: None,
            warehouse: Some("Koledino".to_string()),
            timestamp: Utc::now(),
        },
        LedgerEvent {
            item_id: 42,
            quantity: 1,
            unit_price: dec!(550),
            kind: EventKind::Return,
            dimensions: None,
            delivery_cost: None,
            warehouse: None,
            timestamp: Utc::now(),
        },
        LedgerEvent {
            item_id: 42,
            quantity: 1,
            unit_price: dec!(550),
            kind: EventKind::Cancel,
            dimensions: None,
            delivery_cost: None,
            warehouse: None,
            timestamp: Utc::now(),
        },
    ];

    let report = SalesAggregator::default().aggregate(&events, &products, &tariffs);
    let b = &report.breakdown;

    // 3 L parcel: 46 + 2*14 = 74, times KTR 1.25, times 3 units.
    assert_eq!(b.revenue, dec!(1650));
    assert_eq!(b.commission, dec!(247.50));
    assert_eq!(b.logistics, dec!(277.50));
    assert_eq!(b.return_logistics, dec!(50));
    assert_eq!(b.sales_count, 1);
    assert_eq!(b.returns_count, 1);
    assert_eq!(b.cancels_count, 1);
    assert_eq!(report.lines.len(), 3);

    // Spread the observed per-unit ship cost over a 70% buyout.
    let per_order = pricing::per_order_logistics(dec!(92.5), dec!(50), dec!(0.7)).unwrap();
    assert!(per_order > dec!(92.5));

    let solution = pricing::solve(&PriceInput {
        cost_price: dec!(200),
        commission_rate_pct: dec!(15),
        tax_rate_pct: dec!(6),
        logistics_per_order: per_order,
        target_margin_pct: dec!(25),
        initial_price: Some(dec!(550)),
        ..Default::default()
    })
    .unwrap();

    assert!(solution.converged);
    assert!(solution.breakdown.margin_pct >= dec!(25) - dec!(0.1));
}

#[test]
fn settlement_mixed_batch_balances() {
    let rows = vec![
        SettlementLineItem {
            kind: DocumentKind::Sale,
            quantity: 2,
            retail_price: dec!(1200),
            retail_price_discounted: Some(dec!(990)),
            for_pay: dec!(1430.50),
            delivery_cost: dec!(87.60),
            ..Default::default()
        },
        SettlementLineItem {
            kind: DocumentKind::Return,
            quantity: 1,
            retail_price: dec!(990),
            for_pay: dec!(715.25),
            return_delivery_cost: dec!(50),
            ..Default::default()
        },
        // Service row the upstream could not classify: storage only.
        SettlementLineItem {
            doc_label: "Хранение".to_string(),
            storage_cost: dec!(31.42),
            ..Default::default()
        },
    ];

    let report = ExpenseReconciler::default().reconcile(&rows);
    let b = &report.breakdown;

    assert_eq!(b.revenue, dec!(990)); // 1980 sold minus 990 returned
    assert_eq!(b.for_pay, dec!(715.25));
    assert_eq!(b.storage, dec!(31.42));
    assert_eq!(report.unclassified_rows, 1);
    assert!(report.conservation.reconciled);
    assert_eq!(
        b.revenue - b.total_expenses,
        b.for_pay + report.conservation.residual
    );
}

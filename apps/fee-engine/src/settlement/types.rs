//! Settlement-report row types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a settlement-report row.
///
/// Assigned once at ingestion by the upstream collaborator; the engine never
/// matches free-text labels itself. Rows the upstream could not classify
/// arrive as [`Self::Unknown`] and are still reconciled for their expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    /// A sale of goods.
    Sale,
    /// A buyer return, offsetting a prior sale.
    Return,
    /// A cancellation, offsetting a prior sale.
    Cancel,
    /// Unrecognized or empty document-type label.
    #[default]
    Unknown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => write!(f, "SALE"),
            Self::Return => write!(f, "RETURN"),
            Self::Cancel => write!(f, "CANCEL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One row of the marketplace's official settlement report.
///
/// Carries the disclosed expense fields; commission is notably absent and
/// must be derived over the batch. Missing numeric fields deserialize to
/// zero rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLineItem {
    /// Classification assigned at ingestion.
    #[serde(default)]
    pub kind: DocumentKind,
    /// Original free-text document-type label, kept for audit only.
    #[serde(default)]
    pub doc_label: String,
    /// Units in the row.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Gross retail price per unit.
    #[serde(default)]
    pub retail_price: Decimal,
    /// Discounted retail price per unit, when present. Preferred for revenue.
    #[serde(default)]
    pub retail_price_discounted: Option<Decimal>,
    /// Amount the marketplace will remit to the seller for this row.
    #[serde(default)]
    pub for_pay: Decimal,
    /// Disclosed outbound delivery cost.
    #[serde(default)]
    pub delivery_cost: Decimal,
    /// Disclosed return-leg delivery cost.
    #[serde(default)]
    pub return_delivery_cost: Decimal,
    /// Disclosed storage cost.
    #[serde(default)]
    pub storage_cost: Decimal,
    /// Disclosed acceptance cost.
    #[serde(default)]
    pub acceptance_cost: Decimal,
    /// Disclosed penalty.
    #[serde(default)]
    pub penalty: Decimal,
    /// Signed adjustment: negative = withheld by the platform (typically
    /// advertising spend), positive = bonus credited to the seller.
    #[serde(default)]
    pub additional_payment: Decimal,
}

const fn default_quantity() -> u32 {
    1
}

impl SettlementLineItem {
    /// Effective per-unit price: the discounted price when present.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.retail_price_discounted.unwrap_or(self.retail_price)
    }

    /// Row revenue: effective price times quantity.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    /// Whether the row carries any nonzero expense field.
    ///
    /// Expense-bearing rows are reconciled even when their classification is
    /// [`DocumentKind::Unknown`].
    #[must_use]
    pub fn has_expenses(&self) -> bool {
        !self.delivery_cost.is_zero()
            || !self.return_delivery_cost.is_zero()
            || !self.storage_cost.is_zero()
            || !self.acceptance_cost.is_zero()
            || !self.penalty.is_zero()
            || !self.additional_payment.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_price_prefers_discounted() {
        let row = SettlementLineItem {
            retail_price: dec!(1000),
            retail_price_discounted: Some(dec!(850)),
            quantity: 2,
            ..Default::default()
        };

        assert_eq!(row.unit_price(), dec!(850));
        assert_eq!(row.amount(), dec!(1700));
    }

    #[test]
    fn test_missing_fields_deserialize_to_zero() {
        let row: SettlementLineItem = serde_json::from_str("{}").unwrap();

        assert_eq!(row.kind, DocumentKind::Unknown);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.for_pay, Decimal::ZERO);
        assert!(!row.has_expenses());
    }

    #[test]
    fn test_has_expenses() {
        let mut row = SettlementLineItem::default();
        assert!(!row.has_expenses());

        row.storage_cost = dec!(0.07);
        assert!(row.has_expenses());

        row.storage_cost = Decimal::ZERO;
        row.additional_payment = dec!(-120);
        assert!(row.has_expenses());
    }
}

//! Derives the undisclosed commission from settlement rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::types::{DocumentKind, SettlementLineItem};
use crate::breakdown::AggregatedBreakdown;
use crate::config::FeeConfig;

/// Result of checking the balance identity `revenue - expenses = forPay`.
///
/// A failed check is a diagnostic, not an error: upstream data is
/// occasionally inconsistent and the breakdown is still the best achievable
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConservationCheck {
    /// `revenue - totalExpenses - forPay`; zero when the batch balances.
    pub residual: Decimal,
    /// Tolerance the residual was checked against.
    pub tolerance: Decimal,
    /// Whether the residual is within tolerance.
    pub reconciled: bool,
}

/// Output of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Accumulated totals with the derived commission.
    pub breakdown: AggregatedBreakdown,
    /// Balance-identity diagnostic for the batch.
    pub conservation: ConservationCheck,
    /// Rows with an unknown classification that still carried expenses.
    pub unclassified_rows: usize,
}

/// Reconciles a batch of settlement-report rows.
///
/// Commission is a balancing figure derived from the identity
/// `revenue = forPay + expenses`, never read from the source: the report
/// discloses every other expense category but omits commission. That means
/// the derivation silently absorbs any fee category the source starts
/// hiding, which is exactly what [`ConservationCheck`] exists to surface.
#[derive(Debug, Clone)]
pub struct ExpenseReconciler {
    tolerance: Decimal,
}

impl Default for ExpenseReconciler {
    fn default() -> Self {
        Self {
            tolerance: FeeConfig::default().conservation_tolerance,
        }
    }
}

impl ExpenseReconciler {
    /// Create a reconciler with a custom conservation tolerance.
    #[must_use]
    pub const fn new(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    /// Reconcile a period's settlement rows into a full breakdown.
    ///
    /// Sale rows add to revenue and for-pay; return and cancel rows subtract
    /// from both, since they offset prior sales. Disclosed expense fields are
    /// accumulated as absolute values regardless of classification, so an
    /// expense-bearing row is never dropped for having an unrecognized label.
    #[must_use]
    pub fn reconcile(&self, rows: &[SettlementLineItem]) -> ReconciliationReport {
        let mut breakdown = AggregatedBreakdown::default();
        let mut unclassified_rows = 0;

        for row in rows {
            match row.kind {
                DocumentKind::Sale => {
                    breakdown.revenue += row.amount();
                    breakdown.for_pay += row.for_pay;
                    breakdown.sales_count += 1;
                }
                DocumentKind::Return => {
                    breakdown.revenue -= row.amount();
                    breakdown.for_pay -= row.for_pay;
                    breakdown.return_revenue += row.amount();
                    breakdown.returns_count += 1;
                }
                DocumentKind::Cancel => {
                    breakdown.revenue -= row.amount();
                    breakdown.for_pay -= row.for_pay;
                    breakdown.cancels_count += 1;
                }
                DocumentKind::Unknown => {
                    if row.has_expenses() {
                        unclassified_rows += 1;
                        debug!(label = %row.doc_label, "unclassified expense-bearing row");
                    }
                }
            }

            // The source's signs are inconsistent; expenses accumulate as
            // absolute values from every row, classified or not.
            breakdown.logistics += row.delivery_cost.abs();
            breakdown.return_logistics += row.return_delivery_cost.abs();
            breakdown.storage += row.storage_cost.abs();
            breakdown.acceptance += row.acceptance_cost.abs();
            breakdown.penalty += row.penalty.abs();

            if row.additional_payment.is_sign_negative() {
                breakdown.advertising += row.additional_payment.abs();
            } else {
                breakdown.other_adjustments += row.additional_payment;
            }
        }

        breakdown.commission =
            (breakdown.revenue - breakdown.for_pay - breakdown.disclosed_expenses()).round_dp(2);
        breakdown.total_expenses = breakdown.commission + breakdown.disclosed_expenses();

        let residual = breakdown.revenue - breakdown.total_expenses - breakdown.for_pay;
        let reconciled = residual.abs() <= self.tolerance;
        if reconciled {
            debug!(
                rows = rows.len(),
                revenue = %breakdown.revenue,
                commission = %breakdown.commission,
                "settlement batch reconciled"
            );
        } else {
            warn!(
                residual = %residual,
                tolerance = %self.tolerance,
                "settlement batch does not balance; breakdown is best-effort"
            );
        }

        ReconciliationReport {
            breakdown,
            conservation: ConservationCheck {
                residual,
                tolerance: self.tolerance,
                reconciled,
            },
            unclassified_rows,
        }
    }
}

//! Expense reconciliation over official settlement-report rows.
//!
//! The marketplace's financial report discloses most expense categories but
//! never the commission. The reconciler derives it from the balance identity
//! `revenue = forPay + expenses` and attaches a first-class conservation
//! check to the result instead of trusting any single field.

mod reconciler;
mod types;

pub use reconciler::{ConservationCheck, ExpenseReconciler, ReconciliationReport};
pub use types::{DocumentKind, SettlementLineItem};

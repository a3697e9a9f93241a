//! Line-item and invoice total arithmetic.
//!
//! Values keep full `f64` precision; rounding happens only when formatting
//! for display. Inputs are not validated or clamped here.

use crate::models::LineItem;
use serde::Serialize;

/// Derived monetary totals of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

pub fn compute_item_total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

/// Subtotal is the in-order sum of item totals; tax is `subtotal * rate / 100`.
pub fn compute_invoice_totals(items: &[LineItem], tax_rate: f64) -> InvoiceTotals {
    let subtotal = items.iter().fold(0.0, |sum, item| sum + item.total);
    let tax_amount = (subtotal * tax_rate) / 100.0;

    InvoiceTotals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

//! Line item model for invoicing-service.

use crate::services::calculations::compute_item_total;
use serde::{Deserialize, Serialize};

/// One billable entry on an invoice.
///
/// `total` is always `quantity * unit_price`; use the setters so it never drifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            total: compute_item_total(quantity, unit_price),
        }
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.total = compute_item_total(self.quantity, self.unit_price);
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.total = compute_item_total(self.quantity, self.unit_price);
    }
}

/// Input for a line item. Existing items keep their id across edits.
#[derive(Debug, Clone)]
pub struct CreateLineItem {
    pub id: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

//! Payment model for invoicing-service.
//!
//! Payments are stored and listed but never consulted when resolving
//! invoice status or building reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A payment received against an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for recording a payment.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub invoice_id: String,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub payment_method: String,
    pub notes: Option<String>,
}

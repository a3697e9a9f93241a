//! Invoice model for invoicing-service.

use super::{Client, CreateLineItem, LineItem};
use crate::services::calculations::InvoiceTotals;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stored payment status of an invoice.
///
/// Any status may be set to any other directly; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Display label in the fixed es-ES convention.
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Pagado",
            InvoiceStatus::Pending => "Pendiente",
            InvoiceStatus::Overdue => "Vencido",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown invoice status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Invoice document.
///
/// `client` is a copy of the client record taken when the invoice was created
/// or last edited. Later edits to the client do not reach it, and `client_id`
/// may outlive the client it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub client_id: String,
    pub client: Client,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    /// Percentage, 0-100.
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    pub fn apply_totals(&mut self, totals: InvoiceTotals) {
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }
}

/// Input for creating an invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub client_id: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub items: Vec<CreateLineItem>,
    pub tax_rate: f64,
    pub notes: Option<String>,
}

/// Input for editing an invoice. Number, status and creation time are kept.
#[derive(Debug, Clone)]
pub struct UpdateInvoice {
    pub client_id: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub items: Vec<CreateLineItem>,
    pub tax_rate: f64,
    pub notes: Option<String>,
}

/// Midnight UTC of a calendar date, the instant a `YYYY-MM-DD` date denotes.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

//! Fixtures shared by the unit tests of the service modules.

use crate::models::{Client, Invoice, InvoiceStatus, LineItem};
use chrono::{DateTime, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+34 600 000 000".to_string(),
        address: "Calle Mayor 1, Madrid".to_string(),
        tax_id: "B12345678".to_string(),
        created_at: now(),
    }
}

pub fn invoice_for(
    client_id: &str,
    status: InvoiceStatus,
    issue_date: DateTime<Utc>,
    due_date: DateTime<Utc>,
    total: f64,
) -> Invoice {
    Invoice {
        id: format!("inv-{}-{}", client_id, issue_date.timestamp()),
        invoice_number: "F-000001".to_string(),
        client_id: client_id.to_string(),
        client: client(client_id, "Snapshot"),
        issue_date,
        due_date,
        items: vec![LineItem::new("item-1", "Work", 1.0, total)],
        subtotal: total,
        tax_rate: 0.0,
        tax_amount: 0.0,
        total,
        status,
        notes: None,
        created_at: issue_date,
        updated_at: issue_date,
    }
}

pub fn invoice_with(status: InvoiceStatus, due_date: DateTime<Utc>, total: f64) -> Invoice {
    invoice_for("c1", status, now(), due_date, total)
}

pub fn invoice_numbered(number: &str) -> Invoice {
    let mut invoice = invoice_with(InvoiceStatus::Pending, now(), 0.0);
    invoice.invoice_number = number.to_string();
    invoice
}

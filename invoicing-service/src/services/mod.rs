//! Services module for invoicing-service.

pub mod book;
pub mod calculations;
pub mod email;
pub mod format;
pub mod ids;
pub mod metrics;
pub mod numbering;
pub mod reports;
pub mod status;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;

pub use book::InvoiceBook;
pub use calculations::{compute_invoice_totals, compute_item_total, InvoiceTotals};
pub use email::{compose_invoice_email, EmailDraft};
pub use format::{format_currency, format_date};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use metrics::{get_metrics, init_metrics};
pub use numbering::next_invoice_number;
pub use reports::{client_income_report, dashboard_stats, recent_paid_invoices};
pub use status::effective_status;
pub use storage::{Collection, InMemoryStore, JsonFileStore, KeyValueStore};

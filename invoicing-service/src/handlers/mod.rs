pub mod clients;
pub mod health;
pub mod invoices;
pub mod payments;
pub mod reports;

pub use clients::{create_client, delete_client, get_client, list_clients, update_client};
pub use health::{health_check, metrics_endpoint};
pub use invoices::{
    create_invoice, delete_invoice, email_invoice, get_invoice, list_invoices, next_number,
    send_invoice_email, update_invoice, update_invoice_status,
};
pub use payments::{list_payments, record_payment};
pub use reports::{dashboard, income_report};

use crate::services::metrics::ERRORS_TOTAL;
use service_core::error::AppError;

/// Count a failed request by error kind and hand the error back.
pub(crate) fn track_error(err: AppError) -> AppError {
    ERRORS_TOTAL.with_label_values(&[err.kind()]).inc();
    err
}

//! Effective status resolution.
//!
//! The stored status is what the user last set. The effective status is what
//! reports use: a stored `Pending` invoice whose due date has passed reads as
//! `Overdue`. Resolution never writes back to the invoice.

use crate::models::{Invoice, InvoiceStatus};
use chrono::{DateTime, Utc};

pub fn effective_status(invoice: &Invoice, now: DateTime<Utc>) -> InvoiceStatus {
    match invoice.status {
        InvoiceStatus::Pending if invoice.due_date < now => InvoiceStatus::Overdue,
        stored => stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{invoice_with, now};
    use chrono::Duration;

    #[test]
    fn pending_past_due_is_overdue() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Pending, now - Duration::days(1), 10.0);
        assert_eq!(effective_status(&invoice, now), InvoiceStatus::Overdue);
    }

    #[test]
    fn pending_not_yet_due_stays_pending() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Pending, now + Duration::days(1), 10.0);
        assert_eq!(effective_status(&invoice, now), InvoiceStatus::Pending);
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Pending, now, 10.0);
        assert_eq!(effective_status(&invoice, now), InvoiceStatus::Pending);
    }

    #[test]
    fn paid_ignores_due_date() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Paid, now - Duration::days(1), 10.0);
        assert_eq!(effective_status(&invoice, now), InvoiceStatus::Paid);
    }

    #[test]
    fn stored_overdue_stays_overdue_before_due_date() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Overdue, now + Duration::days(30), 10.0);
        assert_eq!(effective_status(&invoice, now), InvoiceStatus::Overdue);
    }

    #[test]
    fn resolution_does_not_mutate_stored_status() {
        let now = now();
        let invoice = invoice_with(InvoiceStatus::Pending, now - Duration::days(5), 10.0);
        let _ = effective_status(&invoice, now);
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }
}

//! Aggregation engine: dashboard stats and per-client income.
//!
//! Every fold uses the effective status and trusts each invoice's stored
//! `total`; nothing is recomputed from line items here.

use crate::models::{
    Client, ClientIncome, ClientIncomeReport, DashboardStats, IncomeTotals, Invoice,
    InvoiceStatus, Period,
};
use crate::services::status::effective_status;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::collections::HashMap;

/// Maximum number of rows in the recent paid invoices view.
pub const RECENT_PAID_LIMIT: usize = 10;

/// Counts and sums over all invoices, including those whose client no longer exists.
pub fn dashboard_stats(invoices: &[Invoice], now: DateTime<Utc>) -> DashboardStats {
    let mut stats = DashboardStats {
        total_invoices: invoices.len(),
        ..DashboardStats::default()
    };

    for invoice in invoices {
        match effective_status(invoice, now) {
            InvoiceStatus::Paid => {
                stats.paid_invoices += 1;
                stats.total_income += invoice.total;
            }
            InvoiceStatus::Pending => {
                stats.pending_invoices += 1;
                stats.pending_amount += invoice.total;
            }
            InvoiceStatus::Overdue => {
                stats.overdue_invoices += 1;
                stats.overdue_amount += invoice.total;
            }
        }
    }

    stats
}

/// Whether `issue_date` falls in `period`, judged on the calendar of `now`'s time zone.
pub fn in_period<Tz: TimeZone>(
    issue_date: &DateTime<Utc>,
    period: Period,
    now: &DateTime<Tz>,
) -> bool {
    let local = issue_date.with_timezone(&now.timezone());
    match period {
        Period::All => true,
        Period::CurrentMonth => local.year() == now.year() && local.month() == now.month(),
        Period::CurrentYear => local.year() == now.year(),
    }
}

/// Income grouped by owning client for invoices issued within `period`.
///
/// Rows appear in the order their client is first seen. Invoices whose
/// `client_id` matches no entry in `clients` get no row but still count in
/// the grand totals, which cover every invoice in the period.
pub fn client_income_report<Tz: TimeZone>(
    invoices: &[Invoice],
    clients: &[Client],
    period: Period,
    now: &DateTime<Tz>,
) -> ClientIncomeReport {
    let now_utc = now.with_timezone(&Utc);
    let directory: HashMap<&str, &Client> =
        clients.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut rows: Vec<ClientIncome> = Vec::new();
    let mut row_index: HashMap<&str, usize> = HashMap::new();
    let mut totals = IncomeTotals::default();
    let mut skipped = 0usize;

    for invoice in invoices
        .iter()
        .filter(|invoice| in_period(&invoice.issue_date, period, now))
    {
        let status = effective_status(invoice, now_utc);
        totals.invoice_count += 1;
        match status {
            InvoiceStatus::Paid => totals.total_income += invoice.total,
            InvoiceStatus::Pending => totals.total_pending += invoice.total,
            InvoiceStatus::Overdue => totals.total_overdue += invoice.total,
        }

        let idx = match row_index.get(invoice.client_id.as_str()) {
            Some(&idx) => idx,
            None => match directory.get(invoice.client_id.as_str()) {
                Some(client) => {
                    rows.push(ClientIncome::new((*client).clone()));
                    row_index.insert(invoice.client_id.as_str(), rows.len() - 1);
                    rows.len() - 1
                }
                None => {
                    skipped += 1;
                    continue;
                }
            },
        };

        let row = &mut rows[idx];
        row.total_invoices += 1;
        match status {
            InvoiceStatus::Paid => row.total_paid += invoice.total,
            InvoiceStatus::Pending => row.total_pending += invoice.total,
            InvoiceStatus::Overdue => row.total_overdue += invoice.total,
        }
    }

    if skipped > 0 {
        tracing::debug!(
            skipped = skipped,
            period = %period,
            "Invoices with unresolved client have no income row"
        );
    }

    ClientIncomeReport {
        per_client: rows,
        totals,
    }
}

/// Effectively paid invoices within `period`, newest issue date first, at most ten.
pub fn recent_paid_invoices<Tz: TimeZone>(
    invoices: &[Invoice],
    period: Period,
    now: &DateTime<Tz>,
) -> Vec<Invoice> {
    let now_utc = now.with_timezone(&Utc);
    let mut paid: Vec<Invoice> = invoices
        .iter()
        .filter(|invoice| in_period(&invoice.issue_date, period, now))
        .filter(|invoice| effective_status(invoice, now_utc) == InvoiceStatus::Paid)
        .cloned()
        .collect();

    paid.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    paid.truncate(RECENT_PAID_LIMIT);
    paid
}

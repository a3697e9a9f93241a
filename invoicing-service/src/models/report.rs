//! Report shapes produced by the aggregation engine.

use super::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat counts and sums over every invoice, by effective status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invoices: usize,
    pub paid_invoices: usize,
    pub pending_invoices: usize,
    pub overdue_invoices: usize,
    pub total_income: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
}

/// Reporting window applied to an invoice's issue date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    All,
    CurrentMonth,
    CurrentYear,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::CurrentMonth => "current-month",
            Period::CurrentYear => "current-year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Income accumulated for one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIncome {
    pub client: Client,
    pub total_invoices: usize,
    pub total_paid: f64,
    pub total_pending: f64,
    pub total_overdue: f64,
}

impl ClientIncome {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            total_invoices: 0,
            total_paid: 0.0,
            total_pending: 0.0,
            total_overdue: 0.0,
        }
    }

    /// Sum of the three buckets.
    pub fn total(&self) -> f64 {
        self.total_paid + self.total_pending + self.total_overdue
    }
}

/// Grand totals across every invoice in the period, with or without a client row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTotals {
    pub invoice_count: usize,
    pub total_income: f64,
    pub total_pending: f64,
    pub total_overdue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIncomeReport {
    pub per_client: Vec<ClientIncome>,
    pub totals: IncomeTotals,
}

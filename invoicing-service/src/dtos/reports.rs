use crate::models::{ClientIncome, IncomeTotals, Invoice, Period};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct IncomeQuery {
    #[serde(default)]
    pub period: Period,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReportResponse {
    pub period: Period,
    pub per_client: Vec<ClientIncome>,
    pub totals: IncomeTotals,
    pub recent_paid: Vec<Invoice>,
}

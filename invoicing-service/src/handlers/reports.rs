use super::track_error;
use crate::dtos::{IncomeQuery, IncomeReportResponse};
use crate::services::{client_income_report, dashboard_stats, recent_paid_invoices};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{Local, Utc};
use service_core::error::AppError;

pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = state.book.list_invoices().await.map_err(track_error)?;
    Ok(Json(dashboard_stats(&invoices, Utc::now())))
}

/// Per-client income for a period, judged on the server's local calendar.
pub async fn income_report(
    State(state): State<AppState>,
    Query(query): Query<IncomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = state.book.list_invoices().await.map_err(track_error)?;
    let clients = state.book.list_clients().await.map_err(track_error)?;
    let now = Local::now();

    let report = client_income_report(&invoices, &clients, query.period, &now);
    let recent_paid = recent_paid_invoices(&invoices, query.period, &now);

    Ok(Json(IncomeReportResponse {
        period: query.period,
        per_client: report.per_client,
        totals: report.totals,
        recent_paid,
    }))
}

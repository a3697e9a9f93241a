use super::track_error;
use crate::dtos::{
    EmailRequest, InvoiceRequest, InvoiceResponse, NextNumberResponse, StatusRequest,
};
use crate::models::Invoice;
use crate::services::{compose_invoice_email, effective_status};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use service_core::error::AppError;
use tracing::info;
use validator::Validate;

fn to_response(invoice: Invoice, now: DateTime<Utc>) -> InvoiceResponse {
    let effective_status = effective_status(&invoice, now);
    InvoiceResponse {
        invoice,
        effective_status,
    }
}

pub async fn list_invoices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let invoices = state.book.list_invoices().await.map_err(track_error)?;
    Ok(Json(
        invoices
            .into_iter()
            .map(|invoice| to_response(invoice, now))
            .collect::<Vec<_>>(),
    ))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .book
        .get_invoice(&invoice_id)
        .await
        .map_err(track_error)?;
    Ok(Json(to_response(invoice, Utc::now())))
}

pub async fn next_number(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoice_number = state.book.peek_next_number().await.map_err(track_error)?;
    Ok(Json(NextNumberResponse { invoice_number }))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<InvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let input = payload.into_create(&state.config.defaults);
    let invoice = state
        .book
        .create_invoice(input)
        .await
        .map_err(track_error)?;

    Ok((StatusCode::CREATED, Json(to_response(invoice, Utc::now()))))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    Json(payload): Json<InvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let input = payload.into_update(&state.config.defaults);
    let invoice = state
        .book
        .update_invoice(&invoice_id, input)
        .await
        .map_err(track_error)?;

    Ok(Json(to_response(invoice, Utc::now())))
}

pub async fn update_invoice_status(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    Json(payload): Json<StatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .book
        .set_invoice_status(&invoice_id, payload.status)
        .await
        .map_err(track_error)?;

    Ok(Json(to_response(invoice, Utc::now())))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .book
        .delete_invoice(&invoice_id)
        .await
        .map_err(track_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Compose the email for an invoice without sending it.
pub async fn email_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state
        .book
        .get_invoice(&invoice_id)
        .await
        .map_err(track_error)?;
    Ok(Json(compose_invoice_email(&invoice)))
}

/// Send the invoice email, applying any edits to the composed draft. Delivery is
/// simulated: the final message is logged and returned.
pub async fn send_invoice_email(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    Json(payload): Json<EmailRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let invoice = state
        .book
        .get_invoice(&invoice_id)
        .await
        .map_err(track_error)?;
    let email = payload.apply_to(compose_invoice_email(&invoice));

    info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        to = %email.to,
        subject = %email.subject,
        "Invoice email sent (simulated)"
    );

    Ok(Json(email))
}

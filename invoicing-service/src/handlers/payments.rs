use super::track_error;
use crate::dtos::PaymentRequest;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_payments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let payments = state.book.list_payments().await.map_err(track_error)?;
    Ok(Json(payments))
}

pub async fn record_payment(
    State(state): State<AppState>,
    Json(payload): Json<PaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let payment = state
        .book
        .record_payment(payload.into())
        .await
        .map_err(track_error)?;

    Ok((StatusCode::CREATED, Json(payment)))
}

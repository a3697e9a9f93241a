use super::track_error;
use crate::dtos::ClientRequest;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clients = state.book.list_clients().await.map_err(track_error)?;
    Ok(Json(clients))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let client = state.book.get_client(&client_id).await.map_err(track_error)?;
    Ok(Json(client))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<ClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let client = state
        .book
        .create_client(payload.into())
        .await
        .map_err(track_error)?;

    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(payload): Json<ClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| track_error(e.into()))?;

    let client = state
        .book
        .update_client(&client_id, payload.into())
        .await
        .map_err(track_error)?;

    Ok(Json(client))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .book
        .delete_client(&client_id)
        .await
        .map_err(track_error)?;
    Ok(StatusCode::NO_CONTENT)
}

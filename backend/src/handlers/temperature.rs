//! Temperature HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::MessageResponse;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::{TemperatureInput, TemperatureQuery};
use crate::services::TemperatureService;
use crate::AppState;

/// List readings, optionally filtered by `startDate`, `endDate` and `locationId`
pub async fn list_temperatures(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TemperatureQuery>,
) -> impl IntoResponse {
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(message) => return AppError::MalformedRequest(message).into_response(),
    };

    let service = TemperatureService::new(state.db.clone());

    match service.list_temperatures(&filter).await {
        Ok(temperatures) => (StatusCode::OK, Json(temperatures)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific reading
pub async fn get_temperature(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    let service = TemperatureService::new(state.db.clone());

    match service.get_temperature(id).await {
        Ok(temperature) => (StatusCode::OK, Json(temperature)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record a new reading
pub async fn create_temperature(
    State(state): State<AppState>,
    AppJson(input): AppJson<TemperatureInput>,
) -> impl IntoResponse {
    let service = TemperatureService::new(state.db.clone());

    match service.create_temperature(input).await {
        Ok(temperature) => (StatusCode::CREATED, Json(temperature)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a reading
pub async fn replace_temperature(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<TemperatureInput>,
) -> impl IntoResponse {
    let service = TemperatureService::new(state.db.clone());

    match service.replace_temperature(id, input).await {
        Ok(temperature) => (StatusCode::OK, Json(temperature)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a reading
pub async fn delete_temperature(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    let service = TemperatureService::new(state.db.clone());

    match service.delete_temperature(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Temperature record removed")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

//! Location HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::MessageResponse;
use crate::extract::{AppJson, AppPath};
use crate::models::LocationInput;
use crate::services::LocationService;
use crate::AppState;

/// List all locations ordered by name
pub async fn list_locations(State(state): State<AppState>) -> impl IntoResponse {
    let service = LocationService::new(state.db.clone());

    match service.list_locations().await {
        Ok(locations) => (StatusCode::OK, Json(locations)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific location
pub async fn get_location(
    State(state): State<AppState>,
    AppPath(id_local): AppPath<i32>,
) -> impl IntoResponse {
    let service = LocationService::new(state.db.clone());

    match service.get_location(id_local).await {
        Ok(location) => (StatusCode::OK, Json(location)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new location
pub async fn create_location(
    State(state): State<AppState>,
    AppJson(input): AppJson<LocationInput>,
) -> impl IntoResponse {
    let service = LocationService::new(state.db.clone());

    match service.create_location(input).await {
        Ok(location) => (StatusCode::CREATED, Json(location)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a location
pub async fn replace_location(
    State(state): State<AppState>,
    AppPath(id_local): AppPath<i32>,
    AppJson(input): AppJson<LocationInput>,
) -> impl IntoResponse {
    let service = LocationService::new(state.db.clone());

    match service.replace_location(id_local, input).await {
        Ok(location) => (StatusCode::OK, Json(location)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a location
pub async fn delete_location(
    State(state): State<AppState>,
    AppPath(id_local): AppPath<i32>,
) -> impl IntoResponse {
    let service = LocationService::new(state.db.clone());

    match service.delete_location(id_local).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Location removed"))).into_response(),
        Err(e) => e.into_response(),
    }
}

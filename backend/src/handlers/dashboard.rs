//! Dashboard HTTP handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::services::DashboardService;
use crate::AppState;

/// Aggregate counts, mean temperature and the latest readings
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let service = DashboardService::new(state.db.clone());

    match service.get_summary().await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => e.into_response(),
    }
}

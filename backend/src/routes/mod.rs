//! Route definitions for the Climate Records API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", location_routes())
        .nest("/temperatures", temperature_routes())
        .route("/dashboard", get(handlers::get_dashboard))
}

/// Location routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route(
            "/:id",
            get(handlers::get_location)
                .put(handlers::replace_location)
                .delete(handlers::delete_location),
        )
}

/// Temperature routes
fn temperature_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_temperatures).post(handlers::create_temperature),
        )
        .route(
            "/:id",
            get(handlers::get_temperature)
                .put(handlers::replace_temperature)
                .delete(handlers::delete_temperature),
        )
}

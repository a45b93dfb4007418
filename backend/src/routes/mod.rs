//! Route definitions for the Crop Price Forecast service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Form and forecast routes
pub fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::show_form))
        .route("/predict", get(handlers::show_form).post(handlers::predict))
        .route("/health", get(handlers::health_check))
}

//! Error handling for the Crop Price Forecast service
//!
//! The service renders HTML pages, so errors are answered in plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ForecastError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Model errors
    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ModelArtifact(_) => (StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE"),
            AppError::Inference(_) | AppError::Forecast(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INFERENCE_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, format!("{}: {}", code, self)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_error_maps_to_500() {
        let err: AppError = ForecastError::LengthMismatch {
            expected: 12,
            actual: 11,
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_artifact_error_maps_to_503() {
        let err = AppError::ModelArtifact("missing".to_string());
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

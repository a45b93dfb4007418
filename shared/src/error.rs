//! Errors raised while assembling a forecast

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Model returned {actual} predictions for {expected} rows")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Model returned a non-finite prediction: {0}")]
    NonFinitePrediction(f64),

    #[error("Model returned a prediction too large to display: {0}")]
    UnrepresentablePrediction(f64),
}

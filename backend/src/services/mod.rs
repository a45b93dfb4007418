//! Business logic services for the Crop Price Forecast service

pub mod forecast;

pub use forecast::{ForecastInput, ForecastOutcome, ForecastService, INVALID_SELECTION_MESSAGE};

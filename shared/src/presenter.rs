//! Turns raw predictions into display-ready forecast points

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ForecastError;
use crate::models::{ForecastPoint, ForecastResult};
use crate::types::HorizonPoint;

/// Round a raw model output to 2 decimal places
///
/// Rounds the exact binary value of `raw`, ties to even, so 2.675 (stored as
/// 2.67499...) becomes 2.67 and 0.125 becomes 0.12.
pub fn round_price(raw: f64) -> Result<Decimal, ForecastError> {
    if !raw.is_finite() {
        return Err(ForecastError::NonFinitePrediction(raw));
    }
    let value =
        Decimal::from_f64_retain(raw).ok_or(ForecastError::UnrepresentablePrediction(raw))?;
    Ok(value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
}

/// Pair horizon point `i` with prediction `i`
pub fn present(
    horizon: &[HorizonPoint],
    predictions: &[f64],
) -> Result<Vec<ForecastPoint>, ForecastError> {
    if horizon.len() != predictions.len() {
        return Err(ForecastError::LengthMismatch {
            expected: horizon.len(),
            actual: predictions.len(),
        });
    }

    horizon
        .iter()
        .zip(predictions)
        .map(|(point, &raw)| {
            Ok(ForecastPoint {
                label: point.label(),
                price: round_price(raw)?,
            })
        })
        .collect()
}

/// Build the full result for the page
pub fn present_result(
    crop: &str,
    horizon: &[HorizonPoint],
    predictions: &[f64],
) -> Result<ForecastResult, ForecastError> {
    Ok(ForecastResult {
        crop: crop.to_string(),
        price_data: present(horizon, predictions)?,
    })
}

//! Feature table construction
//!
//! The submitted observation is broadcast across every horizon month. Only the
//! month and year columns vary between rows.

use crate::models::{FeatureRow, Observation};
use crate::types::HorizonPoint;

/// One [`FeatureRow`] per horizon point, in horizon order
pub fn build_features(observation: &Observation, horizon: &[HorizonPoint]) -> Vec<FeatureRow> {
    let location = observation.location_code();
    let crop = observation.crop_code();

    horizon
        .iter()
        .map(|point| FeatureRow {
            location,
            crop,
            rainfall: observation.rainfall,
            temperature: observation.temperature,
            humidity: observation.humidity,
            month: point.month(),
            year: point.short_year(),
        })
        .collect()
}

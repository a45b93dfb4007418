//! Forecast service: turns a form submission into a twelve-month forecast
//!
//! Encodes the categories, builds the feature table for the current horizon,
//! runs the model and formats the result.

use shared::{
    build_features, current_horizon, encode_selection, present_result, Category, ForecastResult,
    HorizonPoint, Observation,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::PriceModel;

/// Message shown when crop or location is not in the lookup tables
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid crop or city selected. Please try again.";

/// Raw form values, categories still unencoded
#[derive(Debug, Clone)]
pub struct ForecastInput {
    pub crop: String,
    pub location: String,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: i32,
    pub price: f64,
}

/// Result of handling one submission
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    Forecast(ForecastResult),
    InvalidSelection,
}

/// Forecast service
#[derive(Clone)]
pub struct ForecastService {
    model: Arc<dyn PriceModel>,
}

impl ForecastService {
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self { model }
    }

    /// Forecast for the twelve months starting now
    pub fn forecast(&self, input: ForecastInput) -> AppResult<ForecastOutcome> {
        self.forecast_for(input, &current_horizon())
    }

    /// Forecast over an explicit horizon
    pub fn forecast_for(
        &self,
        input: ForecastInput,
        horizon: &[HorizonPoint],
    ) -> AppResult<ForecastOutcome> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "forecast",
            %request_id,
            crop = %input.crop,
            location = %input.location
        );
        let _guard = span.enter();

        let Some(selection) = encode_selection(&input.crop, &input.location) else {
            tracing::warn!("Rejected unknown crop or location");
            return Ok(ForecastOutcome::InvalidSelection);
        };

        let observation = Observation {
            crop: selection.crop,
            location: selection.location,
            rainfall: input.rainfall,
            temperature: input.temperature,
            humidity: input.humidity,
            price: input.price,
        };

        let rows = build_features(&observation, horizon);
        tracing::debug!(
            crop_code = observation.crop_code(),
            location_code = observation.location_code(),
            rows = rows.len(),
            "Built feature table"
        );

        let predictions = self.model.predict(&rows)?;
        if predictions.len() != rows.len() {
            return Err(AppError::Inference(format!(
                "expected {} predictions, got {}",
                rows.len(),
                predictions.len()
            )));
        }

        let result = present_result(observation.crop.name(), horizon, &predictions)?;
        tracing::info!("Forecast produced {} points", result.price_data.len());

        Ok(ForecastOutcome::Forecast(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::{FeatureRow, HORIZON_MONTHS};
    use std::sync::Mutex;

    /// Records the rows it was given and predicts `base + index`
    #[derive(Default)]
    struct RecordingModel {
        seen: Mutex<Vec<FeatureRow>>,
    }

    impl PriceModel for RecordingModel {
        fn predict(&self, rows: &[FeatureRow]) -> AppResult<Vec<f64>> {
            self.seen.lock().unwrap().extend_from_slice(rows);
            Ok((0..rows.len()).map(|i| 1000.0 + i as f64 + 0.456).collect())
        }

        fn describe(&self) -> String {
            "recording".to_string()
        }
    }

    struct ShortModel;

    impl PriceModel for ShortModel {
        fn predict(&self, _rows: &[FeatureRow]) -> AppResult<Vec<f64>> {
            Ok(vec![1.0])
        }

        fn describe(&self) -> String {
            "short".to_string()
        }
    }

    fn input(crop: &str, location: &str) -> ForecastInput {
        ForecastInput {
            crop: crop.to_string(),
            location: location.to_string(),
            rainfall: 800.0,
            temperature: 30.0,
            humidity: 60,
            price: 2000.0,
        }
    }

    #[test]
    fn test_rice_in_guntur() {
        let model = Arc::new(RecordingModel::default());
        let service = ForecastService::new(model.clone());

        let outcome = service.forecast(input("Rice", "Guntur")).unwrap();
        let ForecastOutcome::Forecast(result) = outcome else {
            panic!("expected a forecast");
        };

        assert_eq!(result.crop, "Rice");
        assert_eq!(result.price_data.len(), HORIZON_MONTHS);
        assert_eq!(result.price_data[0].price, "1000.46".parse::<Decimal>().unwrap());
        assert_eq!(result.price_data[11].price, "1011.46".parse::<Decimal>().unwrap());

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), HORIZON_MONTHS);
        assert!(seen.iter().all(|r| r.crop == 3 && r.location == 1));
    }

    #[test]
    fn test_unknown_crop_skips_model() {
        let model = Arc::new(RecordingModel::default());
        let service = ForecastService::new(model.clone());

        let outcome = service.forecast(input("Wheat", "Guntur")).unwrap();
        assert_eq!(outcome, ForecastOutcome::InvalidSelection);
        assert!(model.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_prediction_count_mismatch_is_error() {
        let service = ForecastService::new(Arc::new(ShortModel));
        let err = service.forecast(input("Maize", "Nellore")).unwrap_err();
        assert!(matches!(err, AppError::Inference(_)));
    }
}

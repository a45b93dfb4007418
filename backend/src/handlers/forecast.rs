//! HTTP handlers for the forecast form

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use shared::CROP_INFO;

use crate::error::AppResult;
use crate::services::{
    ForecastInput, ForecastOutcome, ForecastService, INVALID_SELECTION_MESSAGE,
};
use crate::views;
use crate::AppState;

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub crop: String,
    pub location: String,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: i32,
    pub price: f64,
}

impl From<PredictForm> for ForecastInput {
    fn from(form: PredictForm) -> Self {
        ForecastInput {
            crop: form.crop,
            location: form.location,
            rainfall: form.rainfall,
            temperature: form.temperature,
            humidity: form.humidity,
            price: form.price,
        }
    }
}

/// Render the input form
pub async fn show_form() -> Html<String> {
    Html(views::index_page())
}

/// Run the forecast and render the result page
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> AppResult<Response> {
    let service = ForecastService::new(state.model.clone());

    match service.forecast(form.into())? {
        ForecastOutcome::Forecast(result) => {
            Ok(Html(views::result_page(&result, CROP_INFO)).into_response())
        }
        ForecastOutcome::InvalidSelection => Ok(INVALID_SELECTION_MESSAGE.into_response()),
    }
}

//! Domain models for the Crop Price Forecast service

mod category;
mod forecast;
mod observation;

pub use category::*;
pub use forecast::*;
pub use observation::*;

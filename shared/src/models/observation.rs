//! Submitted observation and the per-month feature rows derived from it

use serde::{Deserialize, Serialize};

use super::category::{Category, Crop, Location};

/// One form submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub crop: Crop,
    pub location: Location,
    /// Rainfall in millimetres
    pub rainfall: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percent
    pub humidity: i32,
    /// Current market price. Collected but not a model feature.
    pub price: f64,
}

/// Column names in the order the model was trained on
pub const FEATURE_COLUMNS: [&str; 7] = [
    "Location",
    "Crop",
    "Rainfall",
    "Temperature",
    "Humidity",
    "Month",
    "Year",
];

/// A single model input row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRow {
    pub location: i32,
    pub crop: i32,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: i32,
    /// Month of year, 1-12
    pub month: u32,
    /// Two-digit year (26 for 2026)
    pub year: i32,
}

impl FeatureRow {
    /// Values laid out as [`FEATURE_COLUMNS`]
    pub fn to_vector(&self) -> [f64; FEATURE_COLUMNS.len()] {
        [
            f64::from(self.location),
            f64::from(self.crop),
            self.rainfall,
            self.temperature,
            f64::from(self.humidity),
            f64::from(self.month),
            f64::from(self.year),
        ]
    }
}

impl Observation {
    pub fn crop_code(&self) -> i32 {
        self.crop.code()
    }

    pub fn location_code(&self) -> i32 {
        self.location.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_follows_column_order() {
        let row = FeatureRow {
            location: 1,
            crop: 3,
            rainfall: 800.0,
            temperature: 30.0,
            humidity: 60,
            month: 10,
            year: 26,
        };
        assert_eq!(row.to_vector(), [1.0, 3.0, 800.0, 30.0, 60.0, 10.0, 26.0]);
    }
}

//! Categorical inputs and their label-encoded codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical field with a fixed name ↔ code table.
///
/// Codes are the integers the forecast model was trained on. The mapping is
/// bijective within each category.
pub trait Category: Copy + Sized + 'static {
    /// Every variant, ordered by code
    const ALL: &'static [Self];

    /// Human-readable name as submitted by the form
    fn name(self) -> &'static str;

    /// Label-encoded value fed to the model
    fn code(self) -> i32;

    /// Exact, case-sensitive name lookup
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Supported crops
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crop {
    Chilli,
    Groundnut,
    Maize,
    Rice,
    Sugarcane,
}

impl Category for Crop {
    const ALL: &'static [Self] = &[
        Crop::Chilli,
        Crop::Groundnut,
        Crop::Maize,
        Crop::Rice,
        Crop::Sugarcane,
    ];

    fn name(self) -> &'static str {
        match self {
            Crop::Chilli => "Chilli",
            Crop::Groundnut => "Groundnut",
            Crop::Maize => "Maize",
            Crop::Rice => "Rice",
            Crop::Sugarcane => "Sugarcane",
        }
    }

    fn code(self) -> i32 {
        match self {
            Crop::Chilli => 0,
            Crop::Groundnut => 1,
            Crop::Maize => 2,
            Crop::Rice => 3,
            Crop::Sugarcane => 4,
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Market locations (districts of Andhra Pradesh)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Location {
    Chittoor,
    Guntur,
    Kadapa,
    Nellore,
    Vijayawada,
}

impl Category for Location {
    const ALL: &'static [Self] = &[
        Location::Chittoor,
        Location::Guntur,
        Location::Kadapa,
        Location::Nellore,
        Location::Vijayawada,
    ];

    fn name(self) -> &'static str {
        match self {
            Location::Chittoor => "Chittoor",
            Location::Guntur => "Guntur",
            Location::Kadapa => "Kadapa",
            Location::Nellore => "Nellore",
            Location::Vijayawada => "Vijayawada",
        }
    }

    fn code(self) -> i32 {
        match self {
            Location::Chittoor => 0,
            Location::Guntur => 1,
            Location::Kadapa => 2,
            Location::Nellore => 3,
            Location::Vijayawada => 4,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

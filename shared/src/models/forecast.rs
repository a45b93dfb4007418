//! Forecast display models and static crop descriptions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the displayed forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// "Month Year", e.g. "October 2026"
    pub label: String,
    /// Predicted price rounded to 2 decimal places
    pub price: Decimal,
}

/// Everything the result page needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub crop: String,
    pub price_data: Vec<ForecastPoint>,
}

/// Static description of a crop
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropInfo {
    pub crop: &'static str,
    pub info: &'static str,
}

pub const CROP_INFO: &[CropInfo] = &[
    CropInfo {
        crop: "Rice",
        info: "Rice (paddy) is a significant crop in Andhra Pradesh, especially in the coastal and delta regions. Major rice-producing districts include East Godavari, West Godavari, Krishna, and Guntur. The state's extensive canal irrigation system supports the cultivation of multiple rice varieties, including BPT, Swarna, and Samba. The Kharif season (June to October) is key for rice farming, with planting starting with the onset of the monsoon.",
    },
    CropInfo {
        crop: "Groundnut",
        info: "Groundnut cultivation is widespread in Andhra Pradesh, with major production in districts like Anantapur, Kurnool, and Chittoor. The crop is well-suited to the state's arid and semi-arid regions. Groundnuts are grown during the Kharif season, with sowing usually taking place in June and harvesting in October. The state's sandy loam soils and warm climate contribute to successful groundnut cultivation.",
    },
    CropInfo {
        crop: "Sugarcane",
        info: "Sugarcane is a vital cash crop in Andhra Pradesh, with cultivation in districts like Krishna, Guntur, and East Godavari. The tropical climate and fertile alluvial soils contribute to successful sugarcane farming. The crop is grown throughout the year, with the peak crushing season typically from November to April. Sugarcane plays a pivotal role in the state's sugar and ethanol production.",
    },
    CropInfo {
        crop: "Maize",
        info: "Maize is cultivated across various regions of Andhra Pradesh, with notable production in districts like Anantapur and Prakasam. The crop is grown both during the Kharif and Rabi seasons, benefiting from the state's diverse soil types and climate. Maize serves as an important fodder crop and is also used in food industries, making it a key agricultural product.",
    },
    CropInfo {
        crop: "Chilli",
        info: "Mirchi, or chili peppers, are prominently cultivated in Andhra Pradesh, known for its spicy cuisine. Guntur district, often referred to as the \"Chili Capital of India,\" is a major producer. The Rabi season, from October to March, is crucial for mirchi cultivation. The red loamy soils and warm temperatures favor the growth of high-quality mirchi varieties, making it a significant cash crop.",
    },
];

/// Look up the description for a crop name
pub fn crop_info_for(crop: &str) -> Option<&'static CropInfo> {
    CROP_INFO.iter().find(|c| c.crop == crop)
}

//! Shared types and pipeline steps for the Crop Price Forecast service
//!
//! Everything here is pure: category encoding, horizon generation, feature
//! construction and presentation. Model inference and HTTP live in the backend.

pub mod encoding;
pub mod error;
pub mod features;
pub mod horizon;
pub mod models;
pub mod presenter;
pub mod types;

pub use encoding::*;
pub use error::*;
pub use features::*;
pub use horizon::*;
pub use models::*;
pub use presenter::*;
pub use types::*;

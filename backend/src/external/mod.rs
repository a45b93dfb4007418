//! External collaborators

pub mod price_model;

pub use price_model::{PriceModel, RandomForestModel};

//! HTTP handlers

mod forecast;
mod health;

pub use forecast::{predict, show_form};
pub use health::health_check;

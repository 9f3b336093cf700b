mod aqi;
pub mod models;
mod service;

pub use models::AirQuality;
pub use service::{AirQualityError, AirQualityService};

pub mod models;
mod service;

pub use models::Place;
pub use service::{GeocodingError, PlaceResolver};

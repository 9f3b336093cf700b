mod condition;
pub mod models;
mod service;

pub use condition::Condition;
pub use service::{WeatherError, WeatherService};

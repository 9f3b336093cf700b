use std::time::Instant;

use reqwest::Client;
use thiserror::Error;

use super::models::{ForecastResponse, WeatherSnapshot};
use crate::telemetry::record_upstream_call;

const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m,weather_code";
const HOURLY_FIELDS: &str = "relative_humidity_2m";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Forecast API error: {0}")]
    ApiError(String),
}

pub struct WeatherService {
    client: Client,
    url: String,
}

impl WeatherService {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Fetch current conditions and the hourly humidity series for a coordinate
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(lat = %latitude, lon = %longitude, "Fetching current weather");

        let started = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .inspect_err(|_| record_upstream_call("forecast", "error", started))?;

        let status = response.status();
        if !status.is_success() {
            record_upstream_call("forecast", "error", started);
            let text = response.text().await.unwrap_or_default();
            return Err(WeatherError::ApiError(format!("HTTP {}: {}", status, text)));
        }

        let data: ForecastResponse = response
            .json()
            .await
            .inspect_err(|_| record_upstream_call("forecast", "error", started))?;
        record_upstream_call("forecast", "ok", started);

        let snapshot = snapshot_from(data);
        tracing::debug!(
            time = ?snapshot.time,
            code = ?snapshot.weather_code,
            humidity = ?snapshot.humidity,
            "Weather data fetched"
        );

        Ok(snapshot)
    }
}

fn snapshot_from(data: ForecastResponse) -> WeatherSnapshot {
    let current = data.current.unwrap_or_default();
    let hourly = data.hourly.unwrap_or_default();

    let humidity = match (hourly.time, hourly.relative_humidity_2m) {
        (Some(times), Some(humidity)) => {
            let now = current.time.clone().unwrap_or_else(current_utc_hour);
            align_humidity(&now, &times, &humidity)
        }
        _ => None,
    };

    WeatherSnapshot {
        time: current.time,
        temperature: current.temperature_2m,
        wind_speed: current.wind_speed_10m,
        weather_code: current.weather_code,
        humidity,
    }
}

/// Humidity at the hour matching `now`; when `now` is not in the series the
/// last humidity sample is used instead.
///
/// NOTE: the last-sample fallback can report a reading from a different hour
/// (the series usually runs days ahead). Kept for response compatibility.
pub fn align_humidity(now: &str, times: &[String], humidity: &[Option<f64>]) -> Option<f64> {
    match times.iter().position(|t| t == now) {
        Some(idx) => humidity.get(idx).copied().flatten(),
        None => humidity.last().copied().flatten(),
    }
}

/// Current UTC hour in the forecast's minute format, "YYYY-MM-DDTHH:00"
fn current_utc_hour() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:00").to_string()
}

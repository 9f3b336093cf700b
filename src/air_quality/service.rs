use std::time::Instant;

use reqwest::Client;
use thiserror::Error;

use super::aqi::aqi_from_pm25;
use super::models::{AirQuality, AirQualityResponse, PollutantSeries};
use crate::telemetry::record_upstream_call;

const HOURLY_FIELDS: &str = "pm2_5,pm10,carbon_monoxide,ozone,nitrogen_dioxide,sulphur_dioxide";

#[derive(Error, Debug)]
pub enum AirQualityError {
    #[error("Failed to fetch air quality data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Air quality API error: {0}")]
    ApiError(String),
}

pub struct AirQualityService {
    client: Client,
    url: String,
}

impl AirQualityService {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Fetch pollutant readings for the hour matching `current_time`
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        current_time: Option<&str>,
    ) -> Result<AirQuality, AirQualityError> {
        tracing::debug!(lat = %latitude, lon = %longitude, "Fetching air quality");

        let started = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .inspect_err(|_| record_upstream_call("air_quality", "error", started))?;

        let status = response.status();
        if !status.is_success() {
            record_upstream_call("air_quality", "error", started);
            let text = response.text().await.unwrap_or_default();
            return Err(AirQualityError::ApiError(format!("HTTP {}: {}", status, text)));
        }

        let data: AirQualityResponse = response
            .json()
            .await
            .inspect_err(|_| record_upstream_call("air_quality", "error", started))?;
        record_upstream_call("air_quality", "ok", started);

        let reading = data
            .hourly
            .map(|series| reading_at(&series, current_time))
            .unwrap_or_default();

        tracing::debug!(pm2_5 = ?reading.pm2_5, aqi = ?reading.aqi_pm25, "Air quality fetched");

        Ok(reading)
    }
}

/// Index of the hour to read: the position of `current_time` in the time
/// series, otherwise the last index of the PM2.5 series.
///
/// NOTE: like the humidity lookup, the last-index fallback may pick an hour
/// far from now. Kept for response compatibility.
pub fn reading_index(
    times: &[String],
    current_time: Option<&str>,
    pm2_5: Option<&[Option<f64>]>,
) -> Option<usize> {
    current_time
        .and_then(|now| times.iter().position(|t| t == now))
        .or_else(|| pm2_5.and_then(|s| s.len().checked_sub(1)))
}

fn reading_at(series: &PollutantSeries, current_time: Option<&str>) -> AirQuality {
    let Some(times) = series.time.as_deref() else {
        return AirQuality::default();
    };
    let Some(idx) = reading_index(times, current_time, series.pm2_5.as_deref()) else {
        return AirQuality::default();
    };

    let at = |s: &Option<Vec<Option<f64>>>| s.as_ref().and_then(|v| v.get(idx).copied().flatten());

    let pm2_5 = at(&series.pm2_5);
    AirQuality {
        pm2_5,
        pm10: at(&series.pm10),
        ozone: at(&series.ozone),
        nitrogen_dioxide: at(&series.nitrogen_dioxide),
        sulphur_dioxide: at(&series.sulphur_dioxide),
        carbon_monoxide: at(&series.carbon_monoxide),
        aqi_pm25: aqi_from_pm25(pm2_5),
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Air Quality API Response (Internal)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AirQualityResponse {
    #[serde(default)]
    pub hourly: Option<PollutantSeries>,
}

/// Hourly pollutant series; concentrations in µg/m³
#[derive(Debug, Default, Deserialize)]
pub struct PollutantSeries {
    #[serde(default)]
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub pm2_5: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub pm10: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub carbon_monoxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub ozone: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub nitrogen_dioxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sulphur_dioxide: Option<Vec<Option<f64>>>,
}

// ============================================================================
// Air quality reading (External - returned to clients as `air_quality`)
// ============================================================================

/// Pollutant readings at one hour, plus the PM2.5-derived AQI.
/// `aqi_pm25` is present exactly when `pm2_5` is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirQuality {
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub ozone: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub sulphur_dioxide: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub aqi_pm25: Option<i32>,
}

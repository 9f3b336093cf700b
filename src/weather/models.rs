use serde::Deserialize;

// ============================================================================
// Forecast API Response (Internal)
// Every block and field may be missing; absence is carried through as None.
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentBlock>,
    #[serde(default)]
    pub hourly: Option<HourlyHumidity>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentBlock {
    /// Local ISO-8601 minute timestamp, e.g. "2024-05-01T14:00"
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HourlyHumidity {
    #[serde(default)]
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
}

// ============================================================================
// Fetch result (what the report pipeline consumes)
// ============================================================================

/// Current reading with humidity already aligned to the current hour
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSnapshot {
    pub time: Option<String>,
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_code: Option<i32>,
    pub humidity: Option<f64>,
}

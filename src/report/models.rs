use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::air_quality::AirQuality;
use crate::geocoding::Place;
use crate::weather::Condition;

/// `?query=` parameter for report endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Free-text place: city, area, state or country
    pub query: Option<String>,
}

/// Current conditions at the resolved place
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CurrentConditions {
    /// Local time of the reading, e.g. "2024-05-01T14:00"
    pub time: Option<String>,
    /// °C
    pub temperature: Option<f64>,
    /// km/h at 10 m
    pub wind_speed: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<i32>,
    pub condition: Condition,
    /// Relative humidity, %
    pub humidity: Option<f64>,
}

/// Everything the dashboard renders for one query
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrichedReport {
    pub place: Place,
    pub current: CurrentConditions,
    pub air_quality: AirQuality,
}

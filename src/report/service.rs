use axum::http::StatusCode;
use thiserror::Error;

use super::models::{CurrentConditions, EnrichedReport};
use crate::air_quality::{AirQualityError, AirQualityService};
use crate::error::HttpError;
use crate::geocoding::{GeocodingError, PlaceResolver};
use crate::impl_into_response;
use crate::telemetry::record_report;
use crate::weather::{Condition, WeatherError, WeatherService};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing ?query=<city or place>")]
    InvalidQuery,

    #[error("Place not found: {0}")]
    NotFound(String),

    #[error("Unsupported weather condition (no weather code for {0})")]
    UnsupportedCondition(String),

    #[error(transparent)]
    Geocoding(GeocodingError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    AirQuality(#[from] AirQualityError),
}

impl From<GeocodingError> for ReportError {
    fn from(err: GeocodingError) -> Self {
        match err {
            GeocodingError::NotFound(query) => Self::NotFound(query),
            other => Self::Geocoding(other),
        }
    }
}

impl HttpError for ReportError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnsupportedCondition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Geocoding(_) | Self::Weather(_) | Self::AirQuality(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidQuery => Some("INVALID_QUERY"),
            Self::NotFound(_) => Some("PLACE_NOT_FOUND"),
            Self::UnsupportedCondition(_) => Some("UNSUPPORTED_CONDITION"),
            Self::Geocoding(_) | Self::Weather(_) | Self::AirQuality(_) => Some("SERVER_ERROR"),
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::InvalidQuery => "Missing ?query=<city or place>",
            Self::NotFound(_) => "Place not found.",
            Self::UnsupportedCondition(_) => "Unsupported weather condition",
            Self::Geocoding(_) | Self::Weather(_) | Self::AirQuality(_) => "Server error",
        }
        .to_string()
    }
}

impl_into_response!(ReportError);

/// Runs the lookup pipeline: geocode, then weather, then air quality.
/// Each upstream call completes before the next one starts.
pub struct ReportService {
    places: PlaceResolver,
    weather: WeatherService,
    air_quality: AirQualityService,
}

impl ReportService {
    pub fn new(
        places: PlaceResolver,
        weather: WeatherService,
        air_quality: AirQualityService,
    ) -> Self {
        Self {
            places,
            weather,
            air_quality,
        }
    }

    pub async fn build(&self, query: &str) -> Result<EnrichedReport, ReportError> {
        let result = self.assemble(query).await;
        record_report(match &result {
            Ok(_) => "OK",
            Err(e) => e.error_code().unwrap_or("SERVER_ERROR"),
        });
        result
    }

    async fn assemble(&self, query: &str) -> Result<EnrichedReport, ReportError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ReportError::InvalidQuery);
        }

        let place = self.places.resolve(query).await?;
        let weather = self.weather.fetch(place.latitude, place.longitude).await?;
        let air_quality = self
            .air_quality
            .fetch(place.latitude, place.longitude, weather.time.as_deref())
            .await?;

        let condition = Condition::classify(weather.weather_code)
            .ok_or_else(|| ReportError::UnsupportedCondition(place.name.clone()))?;

        tracing::info!(
            query = %query,
            place = %place.name,
            condition = %condition,
            temp = ?weather.temperature,
            aqi = ?air_quality.aqi_pm25,
            "Report built"
        );

        Ok(EnrichedReport {
            place,
            current: CurrentConditions {
                time: weather.time,
                temperature: weather.temperature,
                wind_speed: weather.wind_speed,
                weather_code: weather.weather_code,
                condition,
                humidity: weather.humidity,
            },
            air_quality,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use reqwest::Client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Report service whose three upstreams live under one mock server
    pub(crate) fn service_for(mock_server: &MockServer) -> ReportService {
        let client = Client::new();
        let base = mock_server.uri();
        ReportService::new(
            PlaceResolver::new(client.clone(), &format!("{base}/v1/search"), 5, "en"),
            WeatherService::new(client.clone(), &format!("{base}/v1/forecast")),
            AirQualityService::new(client, &format!("{base}/v1/air-quality")),
        )
    }

    pub(crate) async fn mount_pune(mock_server: &MockServer, weather_code: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {
                        "name": "Pune",
                        "latitude": 18.51957,
                        "longitude": 73.85535,
                        "timezone": "Asia/Kolkata",
                        "country": "India",
                        "admin1": "Maharashtra"
                    },
                    {
                        "name": "Pune",
                        "latitude": -8.6,
                        "longitude": 126.2,
                        "timezone": "Asia/Dili",
                        "country": "Timor Leste",
                        "admin1": "Other"
                    }
                ]
            })))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "18.51957"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": {
                    "time": "2024-05-01T14:00",
                    "temperature_2m": 33.1,
                    "wind_speed_10m": 9.4,
                    "weather_code": weather_code
                },
                "hourly": {
                    "time": ["2024-05-01T13:00", "2024-05-01T14:00"],
                    "relative_humidity_2m": [30, 28]
                }
            })))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/air-quality"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": {
                    "time": ["2024-05-01T13:00", "2024-05-01T14:00"],
                    "pm2_5": [20.0, 12.0],
                    "pm10": [30.0, 25.0],
                    "carbon_monoxide": [250.0, 240.0],
                    "ozone": [80.0, 85.0],
                    "nitrogen_dioxide": [10.0, 11.0],
                    "sulphur_dioxide": [3.0, 4.0]
                }
            })))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_build_full_report() {
        let mock_server = MockServer::start().await;
        mount_pune(&mock_server, serde_json::json!(61)).await;

        let report = service_for(&mock_server)
            .build("  Pune, Maharashtra, India ")
            .await
            .unwrap();

        assert_eq!(report.place.name, "Pune");
        assert_eq!(report.place.admin1.as_deref(), Some("Maharashtra"));
        assert_eq!(report.current.condition, Condition::Rain);
        assert_eq!(report.current.humidity, Some(28.0));
        assert_eq!(report.air_quality.pm2_5, Some(12.0));
        assert_eq!(report.air_quality.aqi_pm25, Some(50));
    }

    #[tokio::test]
    async fn test_blank_query_never_reaches_upstream() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server).build("   ").await.unwrap_err();
        assert!(matches!(err, ReportError::InvalidQuery));
    }

    #[tokio::test]
    async fn test_missing_weather_code_is_unsupported() {
        let mock_server = MockServer::start().await;
        mount_pune(&mock_server, serde_json::Value::Null).await;

        let err = service_for(&mock_server).build("Pune").await.unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedCondition(_)));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unrecognised_weather_code_is_still_reported() {
        let mock_server = MockServer::start().await;
        mount_pune(&mock_server, serde_json::json!(999)).await;

        let report = service_for(&mock_server).build("Pune").await.unwrap();
        assert_eq!(report.current.condition, Condition::Unknown);
        assert_eq!(report.current.weather_code, Some(999));
    }

    #[test]
    fn test_upstream_errors_hide_details() {
        let err = ReportError::from(WeatherError::ApiError("HTTP 502: bad gateway".into()));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error");
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_geocoding_not_found_maps_to_not_found() {
        let err = ReportError::from(GeocodingError::NotFound("Atlantis".into()));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Place not found.");
        assert_eq!(err.error_code(), Some("PLACE_NOT_FOUND"));
    }
}

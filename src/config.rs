use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Overall timeout for one inbound request (unset = wait for upstreams indefinitely)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Directory served under /images (background artwork)
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// Upstream Open-Meteo endpoints and client settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Geocoding search parameters
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Geocoding name-search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Forecast endpoint (current conditions + hourly humidity)
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// Air quality endpoint (hourly pollutant series)
    #[serde(default = "default_air_quality_url")]
    pub air_quality_url: String,

    /// TCP connect timeout for upstream calls
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Per-call timeout for upstream calls (unset = none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            air_quality_url: default_air_quality_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Maximum number of candidates requested from the geocoder
    #[serde(default = "default_candidate_count")]
    pub count: u8,

    /// Language for candidate names
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            count: default_candidate_count(),
            language: default_language(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_air_quality_url() -> String {
    "https://air-quality-api.open-meteo.com/v1/air-quality".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_candidate_count() -> u8 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // WEATHERDASH_PORT=8080, WEATHERDASH_UPSTREAM__TIMEOUT_SECS=10, ...
            .add_source(
                Environment::with_prefix("WEATHERDASH")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Geocoding API Response (Internal)
// ============================================================================

/// Raw name-search response. `results` is omitted entirely when nothing matches.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<Place>>,
}

// ============================================================================
// Resolved place (External - returned to clients as `place`)
// ============================================================================

/// A geocoding candidate; the selected one becomes the report's place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative region (state, province, ...)
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
}

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::air_quality::AirQuality;
use crate::dashboard::{AqiBadge, BackgroundTheme, DashboardView};
use crate::error::ErrorResponse;
use crate::geocoding::Place;
use crate::report::models::CurrentConditions;
use crate::report::EnrichedReport;
use crate::routes::HealthResponse;
use crate::weather::Condition;

/// OpenAPI documentation for the weather dashboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weatherdash API",
        version = "1.0.0",
        description = "Place lookup with current weather and air quality from Open-Meteo, plus display-ready dashboard values.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "weather", description = "Enriched weather report for a place"),
        (name = "dashboard", description = "Display values for the weather card")
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            EnrichedReport,
            Place,
            CurrentConditions,
            Condition,
            AirQuality,
            DashboardView,
            AqiBadge,
            BackgroundTheme,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

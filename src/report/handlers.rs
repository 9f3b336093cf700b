use axum::{extract::State, Json};

use super::models::EnrichedReport;
use super::service::ReportError;
use crate::extractors::PlaceQuery;
use crate::AppState;

/// Resolve a place and return its current weather and air quality
///
/// GET /api/weather?query=Pune
pub async fn get_weather(
    State(state): State<AppState>,
    query: PlaceQuery,
) -> Result<Json<EnrichedReport>, ReportError> {
    let report = state.report_service.build(query.as_str()).await?;
    Ok(Json(report))
}

use axum::{extract::State, response::Html, Json};

use super::view::DashboardView;
use crate::extractors::PlaceQuery;
use crate::report::ReportError;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Build the report and return it as display-ready card values
///
/// GET /api/dashboard?query=Pune
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: PlaceQuery,
) -> Result<Json<DashboardView>, ReportError> {
    let report = state.report_service.build(query.as_str()).await?;
    Ok(Json(DashboardView::from_report(&report)))
}

/// Search form and weather card
///
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

use axum::{
    error_handling::HandleErrorLayer, http::StatusCode, routing::get, BoxError, Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::dashboard::handlers as dashboard_handlers;
use crate::error::ErrorResponse;
use crate::openapi::swagger_ui;
use crate::report::handlers as report_handlers;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle request timeout errors
async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::with_code("Request timed out", "TIMEOUT")),
        )
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_code("Server error", "SERVER_ERROR")),
        )
    }
}

/// Build the JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(report_handlers::get_weather))
        .route("/dashboard", get(dashboard_handlers::get_dashboard))
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(dashboard_handlers::index))
        .route("/health", get(health))
        .nest("/api", api_routes())
        .nest_service("/images", ServeDir::new(&state.config.images_dir))
        // Swagger UI for API documentation
        .merge(swagger_ui());

    if let Some(handle) = state.metrics.clone() {
        router = router.route("/metrics", get(move || std::future::ready(handle.render())));
    }

    if let Some(secs) = state.config.request_timeout_secs {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(secs)),
        );
    }

    router
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

mod air_quality;
mod config;
mod dashboard;
mod error;
mod extractors;
mod geocoding;
mod openapi;
mod report;
mod routes;
mod telemetry;
mod units;
mod weather;

use metrics_exporter_prometheus::PrometheusHandle;
use reqwest::Client;
use std::{sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::air_quality::AirQualityService;
use crate::config::{AppConfig, UpstreamConfig};
use crate::geocoding::PlaceResolver;
use crate::report::ReportService;
use crate::weather::WeatherService;

/// Shared HTTP client configuration
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<ReportService>,
    pub config: Arc<AppConfig>,
    pub metrics: Option<PrometheusHandle>,
}

/// Create shared HTTP client with connection pooling
fn create_http_client(upstream: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10);

    if let Some(secs) = upstream.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherdash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let metrics = match telemetry::install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    let http_client = create_http_client(&config.upstream)?;
    tracing::debug!("Shared HTTP client created");

    let upstream = &config.upstream;
    let report_service = Arc::new(ReportService::new(
        PlaceResolver::new(
            http_client.clone(),
            &upstream.geocoding_url,
            config.geocoding.count,
            &config.geocoding.language,
        ),
        WeatherService::new(http_client.clone(), &upstream.forecast_url),
        AirQualityService::new(http_client, &upstream.air_quality_url),
    ));

    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState {
        report_service,
        config: Arc::new(config),
        metrics,
    };
    let app = routes::build_router(state);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

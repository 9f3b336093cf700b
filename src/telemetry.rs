use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Call once, from `main`.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Count one upstream call and record how long it took
pub fn record_upstream_call(provider: &'static str, outcome: &'static str, started: Instant) {
    metrics::counter!(
        "weatherdash_upstream_requests_total",
        "provider" => provider,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "weatherdash_upstream_duration_seconds",
        "provider" => provider
    )
    .record(started.elapsed().as_secs_f64());
}

/// Count one report request by its outcome code
pub fn record_report(outcome: &'static str) {
    metrics::counter!("weatherdash_reports_total", "outcome" => outcome).increment(1);
}

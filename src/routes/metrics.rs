//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "wordquest_actions_total",
        "Total number of actions processed"
    );
    metrics::describe_histogram!(
        "wordquest_action_duration_seconds",
        "Action duration in seconds, provider round trip included"
    );
    metrics::describe_counter!(
        "wordquest_upstream_errors_total",
        "Provider calls that failed"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a finished action
pub fn record_action(action: &str, status: &str, duration_secs: f64) {
    metrics::counter!(
        "wordquest_actions_total",
        "action" => action.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("wordquest_action_duration_seconds", "action" => action.to_string())
        .record(duration_secs);
}

/// Record a failed provider call
pub fn record_upstream_error(action: &str) {
    metrics::counter!("wordquest_upstream_errors_total", "action" => action.to_string())
        .increment(1);
}

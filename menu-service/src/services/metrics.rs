//! Prometheus metrics for menu-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Call once, before serving.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))
    })?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("Metrics already initialized")))
}

/// Render all metrics in Prometheus text format. Empty until [`init_metrics`] ran.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Count one menu item operation by its outcome (`ok`, `not_found`, `rejected`, `error`).
pub fn record_menu_operation(operation: &'static str, outcome: &'static str) {
    counter!(
        "menu_item_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

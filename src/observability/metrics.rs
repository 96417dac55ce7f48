//! Metrics collection and exposition.
//!
//! # Metrics
//! - `purge_diag_check_severity` (gauge): per-check severity, 0=ok,
//!   1=warning, 2=error, labelled by check id
//! - `purge_diag_runs_total` (counter): diagnostic passes, labelled by the
//!   worst severity observed in the pass

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::diagnostics::severity::Severity;

/// Install the Prometheus recorder and start the scrape endpoint.
///
/// Failure is logged, not fatal: the daemon still runs, metric updates
/// become no-ops.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the severity a check produced in the latest pass.
pub fn record_check_severity(check: &'static str, severity: Severity) {
    let value = match severity {
        Severity::Ok => 0.0,
        Severity::Warning => 1.0,
        Severity::Error => 2.0,
    };
    metrics::gauge!("purge_diag_check_severity", "check" => check).set(value);
}

/// Count a completed diagnostic pass by its worst severity.
pub fn record_run(worst: Severity) {
    metrics::counter!("purge_diag_runs_total", "worst" => worst.to_string()).increment(1);
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `status_evaluations_total` (counter): evaluation passes by overall color
//! - `status_evaluation_duration_seconds` (histogram): evaluation latency
//! - `status_subsystem_health` (gauge): 2=healthy, 1=unknown, 0=degraded
//! - `status_overall_health` (gauge): worst subsystem verdict

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::health::evaluate::ReportEvaluation;
use crate::health::verdict::HealthVerdict;

/// Start the Prometheus exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

fn gauge_value(verdict: HealthVerdict) -> f64 {
    match verdict {
        HealthVerdict::Healthy => 2.0,
        HealthVerdict::Unknown => 1.0,
        HealthVerdict::Degraded => 0.0,
    }
}

/// Record counters and gauges for one completed evaluation pass.
pub fn record_evaluation(evaluation: &ReportEvaluation, started: Instant) {
    metrics::counter!(
        "status_evaluations_total",
        "overall" => evaluation.overall.color().as_str()
    )
    .increment(1);
    metrics::histogram!("status_evaluation_duration_seconds")
        .record(started.elapsed().as_secs_f64());
    metrics::gauge!("status_overall_health").set(gauge_value(evaluation.overall));

    for entry in &evaluation.subsystems {
        metrics::gauge!(
            "status_subsystem_health",
            "subsystem" => entry.subsystem.key()
        )
        .set(gauge_value(entry.verdict));
    }
}

//! Status evaluation loop.
//!
//! # Data Flow
//! ```text
//! Periodic timer ─┐
//! Document watch ─┼→ read document → parse → evaluate
//!                 │      → swap shared ReportEvaluation
//!                 │      → log verdict transitions
//!                 │      → record metrics
//! Shutdown ───────┴→ exit loop
//! ```
//!
//! # Design Decisions
//! - One immutable evaluation shared via ArcSwap; readers never block
//! - An unreadable or invalid document evaluates to all-Unknown and the
//!   loop keeps running
//! - Random startup jitter so a fleet of monitors does not evaluate in
//!   lockstep

pub mod watcher;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use rand::Rng;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::schema::MonitorConfig;
use crate::health::evaluate::{evaluate, ReportEvaluation};
use crate::health::verdict::HealthVerdict;
use crate::monitor::watcher::DocumentWatcher;
use crate::observability::metrics;
use crate::status::report::StatusReport;

/// Periodically evaluates the status document and publishes the result.
pub struct StatusMonitor {
    config: MonitorConfig,
    current: Arc<ArcSwap<ReportEvaluation>>,
}

impl StatusMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            current: Arc::new(ArcSwap::from_pointee(ReportEvaluation::unavailable())),
        }
    }

    /// Handle to the latest evaluation; updated in place by [`run`].
    ///
    /// [`run`]: StatusMonitor::run
    pub fn current(&self) -> Arc<ArcSwap<ReportEvaluation>> {
        self.current.clone()
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if self.config.poll.startup_jitter_ms > 0 {
            let jitter = rand::thread_rng().gen_range(0..=self.config.poll.startup_jitter_ms);
            time::sleep(Duration::from_millis(jitter)).await;
        }

        let (watcher, mut change_rx) = DocumentWatcher::new(Path::new(&self.config.source.path));
        // Kept alive for the whole loop; dropping it stops change events.
        let _watch_handle = if self.config.source.watch {
            match watcher.run() {
                Ok(handle) => Some(handle),
                Err(e) => {
                    tracing::warn!(
                        path = %self.config.source.path,
                        error = %e,
                        "Document watch unavailable, polling only"
                    );
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(
            path = %self.config.source.path,
            interval_secs = self.config.poll.interval_secs,
            "Status monitor starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.poll.interval_secs));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.evaluate_once();
                }
                Some(_) = change_rx.recv() => {
                    tracing::debug!("Status document changed, re-evaluating");
                    self.evaluate_once();
                }
                _ = shutdown.recv() => {
                    tracing::info!("Status monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn evaluate_once(&self) {
        let started = Instant::now();
        let path = &self.config.source.path;

        let report = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<StatusReport>(&content) {
                Ok(report) => Some(report),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Status document is not valid JSON");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Status document unreadable");
                None
            }
        };

        if let Some(report) = &report {
            if !report.extra.is_empty() {
                tracing::debug!(
                    keys = ?report.extra.keys().collect::<Vec<_>>(),
                    "Ignoring unmonitored status keys"
                );
            }
        }

        let evaluation = Arc::new(match &report {
            Some(report) => evaluate(report),
            None => ReportEvaluation::unavailable(),
        });

        let previous = self.current.swap(evaluation.clone());
        log_transitions(&previous, &evaluation);
        metrics::record_evaluation(&evaluation, started);
    }
}

fn log_transitions(previous: &ReportEvaluation, current: &ReportEvaluation) {
    for entry in &current.subsystems {
        let before = previous.verdict_for(entry.subsystem);
        if before == entry.verdict {
            continue;
        }
        if entry.verdict == HealthVerdict::Healthy {
            tracing::info!(
                subsystem = entry.subsystem.key(),
                from = %before,
                "Subsystem recovered"
            );
        } else {
            tracing::warn!(
                subsystem = entry.subsystem.key(),
                from = %before,
                to = %entry.verdict,
                error = entry.error.as_deref().unwrap_or(""),
                "Subsystem health changed"
            );
        }
    }

    if previous.overall != current.overall {
        tracing::info!(
            from = %previous.overall,
            to = %current.overall,
            "Overall health changed"
        );
    }
}

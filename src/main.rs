//! System status monitor service.
//!
//! # Architecture Overview
//!
//! ```text
//! collector document (JSON)
//!     │
//!     ▼
//! ┌──────────┐    ┌────────────┐    ┌──────────┐    ┌──────────────────┐
//! │  status  │───▶│   health   │───▶│ monitor  │───▶│     ArcSwap      │
//! │ (parse)  │    │ (classify) │    │  (loop)  │    │ ReportEvaluation │
//! └──────────┘    └────────────┘    └──────────┘    └──────────────────┘
//!
//! Cross-cutting: config, observability (logging, metrics), lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use status_monitor::config::{self, MonitorConfig};
use status_monitor::lifecycle::{signals, Shutdown};
use status_monitor::monitor::StatusMonitor;
use status_monitor::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "status-monitor")]
#[command(about = "Evaluates collected system-status documents", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => MonitorConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("status-monitor v0.1.0 starting");
    tracing::info!(
        source = %config.source.path,
        interval_secs = config.poll.interval_secs,
        watch = config.source.watch,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let monitor = StatusMonitor::new(config);
    let current = monitor.current();

    let monitor_handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    signals::handle_signals(&shutdown).await;
    let _ = monitor_handle.await;

    let evaluation = current.load();
    tracing::info!(overall = %evaluation.overall, "Shutdown complete");
    Ok(())
}

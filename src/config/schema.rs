//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the status monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Where the collected status document lives.
    pub source: SourceConfig,

    /// Evaluation cadence.
    pub poll: PollConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Status document source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the status document (JSON) written by the collector.
    pub path: String,

    /// Re-evaluate immediately when the document changes on disk, in
    /// addition to the periodic pass.
    pub watch: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: "status.json".to_string(),
            watch: true,
        }
    }
}

/// Evaluation cadence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between evaluation passes.
    pub interval_secs: u64,

    /// Upper bound for the random startup delay in milliseconds, so a
    /// fleet of monitors does not evaluate in lockstep.
    pub startup_jitter_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            startup_jitter_ms: 500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

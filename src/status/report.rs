//! The collected status document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::health::verdict::StatusColor;
use crate::status::heartbeat::HeartbeatSnapshot;
use crate::status::subsystem::Subsystem;

/// Metrics block reported for a probed subsystem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubsystemMetrics {
    /// Traffic-light color from the collector's own probe.
    pub status: StatusColor,

    /// Remaining metric fields (elapsed, counts, endpoint info, ...).
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// Error record emitted when a probe could not run at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusError {
    pub error: String,
}

/// Outcome of probing one subsystem.
///
/// The collector emits either a metrics record or `{"error": "..."}`.
/// The two shapes parse into an explicit variant so downstream code can
/// match instead of sniffing for fields. A metrics record may itself
/// carry an `error` field next to its color; that stays inside
/// [`SubsystemMetrics::fields`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SubsystemStatus {
    Ok(SubsystemMetrics),
    Error(StatusError),
}

/// Task-executor section: heartbeat histories, or an error record when
/// the collector could not reach the executor registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TaskExecutorStatus {
    Heartbeats(HeartbeatSnapshot),
    Error(StatusError),
}

/// Version probe result. The version string and the error are reported
/// independently; both may be absent while the probe is still pending.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VersionInfo {
    pub version: Option<String>,
    pub error: Option<String>,
}

/// The full status document produced by the collector.
///
/// Absent sections mean the collector had nothing to say; evaluation
/// turns them into `Unknown`, never an error. Keys this monitor does not
/// track are preserved in `extra` so callers can log them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusReport {
    pub version: Option<VersionInfo>,
    pub doc_engine: Option<SubsystemStatus>,
    pub storage: Option<SubsystemStatus>,
    pub redis: Option<SubsystemStatus>,
    pub database: Option<SubsystemStatus>,
    pub task_executor_heartbeats: Option<TaskExecutorStatus>,

    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl StatusReport {
    /// Probe outcome for one of the plain (non-executor, non-version)
    /// subsystems.
    pub fn subsystem(&self, subsystem: Subsystem) -> Option<&SubsystemStatus> {
        match subsystem {
            Subsystem::DocEngine => self.doc_engine.as_ref(),
            Subsystem::Storage => self.storage.as_ref(),
            Subsystem::Redis => self.redis.as_ref(),
            Subsystem::Database => self.database.as_ref(),
            Subsystem::Version | Subsystem::TaskExecutor => None,
        }
    }
}

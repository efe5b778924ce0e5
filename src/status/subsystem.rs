//! Monitored subsystem identities.

use serde::{Deserialize, Serialize};

/// A subsystem the collector reports on.
///
/// Wire keys match the collector document. Display metadata (title, icon
/// name) is static configuration handed to presentation code; it never
/// influences classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Subsystem {
    #[serde(rename = "version")]
    Version,
    #[serde(rename = "doc_engine")]
    DocEngine,
    #[serde(rename = "storage")]
    Storage,
    #[serde(rename = "redis")]
    Redis,
    #[serde(rename = "database")]
    Database,
    #[serde(rename = "task_executor_heartbeats")]
    TaskExecutor,
}

impl Subsystem {
    /// Every monitored subsystem, in report order.
    pub const ALL: [Subsystem; 6] = [
        Subsystem::Version,
        Subsystem::DocEngine,
        Subsystem::Storage,
        Subsystem::Redis,
        Subsystem::Database,
        Subsystem::TaskExecutor,
    ];

    /// Key used in the collector document.
    pub fn key(&self) -> &'static str {
        match self {
            Subsystem::Version => "version",
            Subsystem::DocEngine => "doc_engine",
            Subsystem::Storage => "storage",
            Subsystem::Redis => "redis",
            Subsystem::Database => "database",
            Subsystem::TaskExecutor => "task_executor_heartbeats",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Subsystem::Version => "Version",
            Subsystem::DocEngine => "Doc Engine",
            Subsystem::Storage => "Object Storage",
            Subsystem::Redis => "Redis",
            Subsystem::Database => "Database",
            Subsystem::TaskExecutor => "Task Executor",
        }
    }

    /// Icon name for badge renderers.
    pub fn icon(&self) -> &'static str {
        match self {
            Subsystem::Version => "system",
            Subsystem::DocEngine => "storage",
            Subsystem::Storage => "minio",
            Subsystem::Redis => "redis",
            Subsystem::Database => "database",
            Subsystem::TaskExecutor => "run",
        }
    }

    /// Look up a subsystem by its document key.
    pub fn from_key(key: &str) -> Option<Subsystem> {
        Subsystem::ALL.iter().copied().find(|s| s.key() == key)
    }
}

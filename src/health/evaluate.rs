//! Whole-report evaluation.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::health::heartbeat::classify_heartbeats;
use crate::health::verdict::HealthVerdict;
use crate::health::version::classify_version;
use crate::status::report::{StatusReport, SubsystemStatus, TaskExecutorStatus};
use crate::status::subsystem::Subsystem;

/// Verdict for one subsystem, with the detail a renderer needs.
#[derive(Debug, Clone)]
pub struct SubsystemEvaluation {
    pub subsystem: Subsystem,
    pub verdict: HealthVerdict,

    /// Error text when the collector reported a failure instead of
    /// metrics.
    pub error: Option<String>,
}

// Serialized with the display catalog inlined (title, icon, badge color)
// so JSON consumers can render a card without a side lookup.
impl Serialize for SubsystemEvaluation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SubsystemEvaluation", 6)?;
        state.serialize_field("subsystem", &self.subsystem)?;
        state.serialize_field("title", self.subsystem.title())?;
        state.serialize_field("icon", self.subsystem.icon())?;
        state.serialize_field("verdict", &self.verdict)?;
        state.serialize_field("color", &self.verdict.color())?;
        match &self.error {
            Some(error) => state.serialize_field("error", error)?,
            None => state.skip_field("error")?,
        }
        state.end()
    }
}

/// Evaluation of a full status document.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEvaluation {
    pub overall: HealthVerdict,
    pub subsystems: Vec<SubsystemEvaluation>,
}

impl ReportEvaluation {
    /// Verdict for one subsystem; absent entries read as `Unknown`.
    pub fn verdict_for(&self, subsystem: Subsystem) -> HealthVerdict {
        self.subsystems
            .iter()
            .find(|entry| entry.subsystem == subsystem)
            .map(|entry| entry.verdict)
            .unwrap_or(HealthVerdict::Unknown)
    }

    /// Evaluation standing in for an absent or unreadable document:
    /// every subsystem `Unknown`.
    pub fn unavailable() -> Self {
        evaluate(&StatusReport::default())
    }
}

/// Evaluate every monitored subsystem of a status document.
///
/// Subsystems absent from the document come back `Unknown`; the overall
/// verdict is the worst across subsystems.
pub fn evaluate(report: &StatusReport) -> ReportEvaluation {
    let mut subsystems = Vec::with_capacity(Subsystem::ALL.len());

    for subsystem in Subsystem::ALL {
        let (verdict, error) = match subsystem {
            Subsystem::Version => match &report.version {
                Some(info) => (classify_version(info), info.error.clone()),
                None => (HealthVerdict::Unknown, None),
            },
            Subsystem::TaskExecutor => match &report.task_executor_heartbeats {
                Some(TaskExecutorStatus::Heartbeats(snapshot)) => {
                    (classify_heartbeats(snapshot), None)
                }
                Some(TaskExecutorStatus::Error(e)) => {
                    (HealthVerdict::Degraded, Some(e.error.clone()))
                }
                None => (HealthVerdict::Unknown, None),
            },
            plain => match report.subsystem(plain) {
                Some(SubsystemStatus::Ok(metrics)) => (metrics.status.verdict(), None),
                Some(SubsystemStatus::Error(e)) => {
                    (HealthVerdict::Degraded, Some(e.error.clone()))
                }
                None => (HealthVerdict::Unknown, None),
            },
        };
        subsystems.push(SubsystemEvaluation {
            subsystem,
            verdict,
            error,
        });
    }

    let overall = subsystems
        .iter()
        .fold(HealthVerdict::Healthy, |acc, entry| acc.worst(entry.verdict));

    ReportEvaluation {
        overall,
        subsystems,
    }
}

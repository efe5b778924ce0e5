//! Plain-text rendering of a report evaluation.
//!
//! One block per subsystem: title, verdict color, then the detail lines a
//! status card would show. No colors or layout; callers wanting structure
//! serialize the evaluation as JSON instead.

pub mod format;

use std::fmt::Write;

use crate::health::evaluate::ReportEvaluation;
use crate::status::heartbeat::HeartbeatSnapshot;
use crate::status::report::{StatusReport, SubsystemStatus, TaskExecutorStatus};
use crate::status::subsystem::Subsystem;

/// Render the evaluated report as plain text.
pub fn render_text(report: &StatusReport, evaluation: &ReportEvaluation) -> String {
    let mut out = String::new();

    for entry in &evaluation.subsystems {
        let _ = writeln!(
            out,
            "{} [{}]",
            entry.subsystem.title(),
            entry.verdict.color()
        );

        match entry.subsystem {
            Subsystem::Version => render_version(&mut out, report),
            Subsystem::TaskExecutor => render_task_executor(&mut out, report),
            plain => render_plain(&mut out, report, plain),
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Overall: {}", evaluation.overall.color());
    out
}

fn render_version(out: &mut String, report: &StatusReport) {
    let text = report
        .version
        .as_ref()
        .and_then(|info| info.version.as_deref().or(info.error.as_deref()))
        .unwrap_or("Version information not available");
    let _ = writeln!(out, "  Version: {}", text);
}

fn render_plain(out: &mut String, report: &StatusReport, subsystem: Subsystem) {
    match report.subsystem(subsystem) {
        Some(SubsystemStatus::Ok(metrics)) => {
            for (key, value) in &metrics.fields {
                let _ = write!(
                    out,
                    "  {}: {}",
                    format::field_label(key),
                    format::field_value(value)
                );
                if key == "elapsed" {
                    out.push_str(" ms");
                }
                out.push('\n');
            }
        }
        Some(SubsystemStatus::Error(e)) => {
            let _ = writeln!(out, "  Error: {}", e.error);
        }
        None => out.push_str("  No data\n"),
    }
}

fn render_task_executor(out: &mut String, report: &StatusReport) {
    match &report.task_executor_heartbeats {
        Some(TaskExecutorStatus::Heartbeats(snapshot)) => {
            out.push_str(&heartbeat_lines(snapshot));
        }
        Some(TaskExecutorStatus::Error(e)) => {
            let _ = writeln!(out, "  Error: {}", e.error);
        }
        None => out.push_str("  No data\n"),
    }
}

/// Per-executor summary: the latest record of each executor, executors
/// ordered by id.
pub fn heartbeat_lines(snapshot: &HeartbeatSnapshot) -> String {
    if snapshot.is_empty() {
        return "  No executors reporting\n".to_string();
    }

    let mut out = String::new();
    for (id, records) in snapshot {
        match records.iter().max_by_key(|record| record.timestamp) {
            Some(latest) => {
                let _ = writeln!(
                    out,
                    "  {}: done {} failed {} ({} records)",
                    id,
                    latest.done,
                    latest.failed,
                    records.len()
                );
            }
            None => {
                let _ = writeln!(out, "  {}: no heartbeats", id);
            }
        }
    }
    out
}

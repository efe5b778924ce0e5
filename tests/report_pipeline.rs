//! End-to-end pipeline tests: document JSON → parse → evaluate → render.

use status_monitor::health::{evaluate, HealthVerdict};
use status_monitor::render;
use status_monitor::status::subsystem::Subsystem;
use status_monitor::StatusReport;

mod common;

fn parse(document: serde_json::Value) -> StatusReport {
    serde_json::from_value(document).expect("document should parse")
}

#[test]
fn test_healthy_document_end_to_end() {
    let report = parse(common::healthy_document());
    let evaluation = evaluate(&report);

    assert_eq!(evaluation.overall, HealthVerdict::Healthy);
    for subsystem in Subsystem::ALL {
        assert_eq!(
            evaluation.verdict_for(subsystem),
            HealthVerdict::Healthy,
            "{} should be healthy",
            subsystem.key()
        );
    }

    let text = render::render_text(&report, &evaluation);
    assert!(text.contains("Version: v0.9.0"));
    assert!(text.contains("Redis [green]"));
    assert!(text.contains("executor-1: done 5 failed 0 (3 records)"));
    assert!(text.contains("Overall: green"));
}

#[test]
fn test_degraded_document_end_to_end() {
    let report = parse(common::degraded_document());
    let evaluation = evaluate(&report);

    assert_eq!(evaluation.overall, HealthVerdict::Degraded);
    assert_eq!(evaluation.verdict_for(Subsystem::Redis), HealthVerdict::Degraded);
    assert_eq!(
        evaluation.verdict_for(Subsystem::TaskExecutor),
        HealthVerdict::Degraded
    );
    // The rest of the system is unaffected.
    assert_eq!(evaluation.verdict_for(Subsystem::Database), HealthVerdict::Healthy);

    let text = render::render_text(&report, &evaluation);
    assert!(text.contains("Redis [red]"));
    assert!(text.contains("Error: connection refused"));
    assert!(text.contains("Overall: red"));
}

#[test]
fn test_empty_document_is_unknown_everywhere() {
    let report: StatusReport = serde_json::from_str("{}").unwrap();
    let evaluation = evaluate(&report);

    assert_eq!(evaluation.overall, HealthVerdict::Unknown);
    for subsystem in Subsystem::ALL {
        assert_eq!(evaluation.verdict_for(subsystem), HealthVerdict::Unknown);
    }
}

#[test]
fn test_evaluation_serializes_for_json_consumers() {
    let report = parse(common::degraded_document());
    let evaluation = evaluate(&report);

    let value = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(value["overall"], "degraded");
    let subsystems = value["subsystems"].as_array().unwrap();
    assert_eq!(subsystems.len(), Subsystem::ALL.len());
    let redis = subsystems
        .iter()
        .find(|s| s["subsystem"] == "redis")
        .unwrap();
    assert_eq!(redis["verdict"], "degraded");
    assert_eq!(redis["color"], "red");
    assert_eq!(redis["title"], "Redis");
    assert_eq!(redis["icon"], "redis");
    assert_eq!(redis["error"], "connection refused");
}

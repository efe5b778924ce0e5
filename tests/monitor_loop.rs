//! Monitor loop tests against real files on disk.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use status_monitor::config::MonitorConfig;
use status_monitor::health::HealthVerdict;
use status_monitor::lifecycle::Shutdown;
use status_monitor::monitor::StatusMonitor;

mod common;

fn temp_document(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("status-monitor-test-{}", name))
}

fn test_config(path: &PathBuf) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.source.path = path.to_string_lossy().into_owned();
    // Polling only: watch backends are platform-dependent and the ticker
    // alone keeps this test deterministic.
    config.source.watch = false;
    config.poll.interval_secs = 1;
    config.poll.startup_jitter_ms = 0;
    config
}

#[tokio::test]
async fn test_monitor_picks_up_document_changes() {
    let path = temp_document("changes.json");
    fs::write(&path, common::healthy_document().to_string()).unwrap();

    let shutdown = Shutdown::new();
    let monitor = StatusMonitor::new(test_config(&path));
    let current = monitor.current();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(current.load().overall, HealthVerdict::Healthy);

    fs::write(&path, common::degraded_document().to_string()).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(current.load().overall, HealthVerdict::Degraded);

    shutdown.trigger();
    handle.await.unwrap();

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn test_missing_document_evaluates_to_unknown() {
    let path = temp_document("never-written.json");

    let shutdown = Shutdown::new();
    let monitor = StatusMonitor::new(test_config(&path));
    let current = monitor.current();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(current.load().overall, HealthVerdict::Unknown);

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_invalid_document_degrades_to_unknown_and_recovers() {
    let path = temp_document("invalid.json");
    fs::write(&path, "{ not json").unwrap();

    let shutdown = Shutdown::new();
    let monitor = StatusMonitor::new(test_config(&path));
    let current = monitor.current();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(current.load().overall, HealthVerdict::Unknown);

    fs::write(&path, common::healthy_document().to_string()).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(current.load().overall, HealthVerdict::Healthy);

    shutdown.trigger();
    handle.await.unwrap();

    let _ = fs::remove_file(&path);
}

//! Shared fixtures for integration tests.

use serde_json::{json, Value};

/// One heartbeat entry as the collector reports it.
pub fn heartbeat(now: &str, done: u64, failed: u64) -> Value {
    json!({ "now": now, "done": done, "failed": failed, "lag": 0, "pending": 0 })
}

/// A document where every subsystem is healthy.
pub fn healthy_document() -> Value {
    json!({
        "version": { "version": "v0.9.0" },
        "doc_engine": { "status": "green", "elapsed": 12.4 },
        "storage": { "status": "green", "elapsed": 3.1 },
        "redis": { "status": "green", "elapsed": 0.8 },
        "database": { "status": "green", "elapsed": 5.0 },
        "task_executor_heartbeats": {
            "executor-1": [
                heartbeat("2026-08-06T10:00:00Z", 4, 0),
                heartbeat("2026-08-06T10:00:30Z", 2, 0),
                heartbeat("2026-08-06T10:01:00Z", 5, 0),
            ],
        },
    })
}

/// The healthy document with a dead redis and a failing executor.
pub fn degraded_document() -> Value {
    let mut document = healthy_document();
    document["redis"] = json!({ "error": "connection refused" });
    document["task_executor_heartbeats"]["executor-1"]
        .as_array_mut()
        .unwrap()
        .push(heartbeat("2026-08-06T10:01:30Z", 0, 3));
    document
}

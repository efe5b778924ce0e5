//! Task-executor heartbeat records.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One observation of an executor's task-processing activity.
///
/// Counts are non-negative by construction and treated as-reported; the
/// classifier only ever tests them for strict positivity, so whether the
/// collector sends deltas or cumulative totals does not change verdicts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeartbeatRecord {
    /// Report time as sent by the executor. Several encodings are accepted
    /// (see [`parse_timestamp`]); anything unparseable becomes `None`.
    #[serde(
        rename = "now",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,

    /// Tasks completed since the previous report.
    #[serde(default)]
    pub done: u64,

    /// Tasks that failed since the previous report.
    #[serde(default)]
    pub failed: u64,

    /// Remaining reported fields (boot time, lag, pending counts, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Heartbeat history per executor id.
///
/// Producer order within a sequence is not trusted; consumers sort
/// explicitly before drawing conclusions.
pub type HeartbeatSnapshot = BTreeMap<String, Vec<HeartbeatRecord>>;

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

/// Parse a heartbeat timestamp.
///
/// Accepted encodings: RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS[.f]`
/// (naive values are taken as UTC), and unix epoch seconds or
/// milliseconds. Returns `None` for anything else.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_datetime_str(s),
        Value::Number(n) => {
            let raw = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            // Heuristic: epoch seconds fit in 11 digits until year 5138.
            if raw.abs() >= 100_000_000_000 {
                DateTime::from_timestamp_millis(raw)
            } else {
                DateTime::from_timestamp(raw, 0)
            }
        }
        _ => None,
    }
}

fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_encodings() {
        let expected = DateTime::parse_from_rfc3339("2026-08-06T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let cases = [
            Value::from("2026-08-06T10:00:00Z"),
            Value::from("Thu, 06 Aug 2026 10:00:00 GMT"),
            Value::from("2026-08-06 10:00:00"),
            Value::from(expected.timestamp()),
            Value::from(expected.timestamp_millis()),
        ];
        for case in cases {
            assert_eq!(parse_timestamp(&case), Some(expected), "case: {case}");
        }
    }

    #[test]
    fn test_parse_timestamp_garbage_is_none() {
        assert_eq!(parse_timestamp(&Value::from("yesterday-ish")), None);
        assert_eq!(parse_timestamp(&Value::Null), None);
        assert_eq!(parse_timestamp(&Value::Bool(true)), None);
    }

    #[test]
    fn test_record_defaults_missing_counts_to_zero() {
        let record: HeartbeatRecord =
            serde_json::from_str(r#"{"now": "2026-08-06T10:00:00Z"}"#).unwrap();
        assert_eq!(record.done, 0);
        assert_eq!(record.failed, 0);
        assert!(record.timestamp.is_some());
    }

    #[test]
    fn test_record_tolerates_bad_timestamp_and_keeps_extras() {
        let record: HeartbeatRecord = serde_json::from_str(
            r#"{"now": "not a date", "done": 3, "failed": 1, "lag": 7, "boot": "2026-08-06"}"#,
        )
        .unwrap();
        assert_eq!(record.timestamp, None);
        assert_eq!(record.done, 3);
        assert_eq!(record.failed, 1);
        assert_eq!(record.extra.get("lag"), Some(&Value::from(7)));
        assert!(record.extra.contains_key("boot"));
    }

    #[test]
    fn test_snapshot_parses_per_executor_histories() {
        let snapshot: HeartbeatSnapshot = serde_json::from_str(
            r#"{
                "executor-1": [{"now": "2026-08-06T10:00:00Z", "done": 2, "failed": 0}],
                "executor-2": []
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["executor-1"].len(), 1);
        assert!(snapshot["executor-2"].is_empty());
    }
}

//! Task-executor heartbeat classification.
//!
//! # Responsibilities
//! - Flatten heartbeat history across all executors
//! - Select the most recent observations
//! - Derive a single traffic-light verdict
//!
//! # Design Decisions
//! - Lookback is the 3 newest records: one historical failure never flags
//!   the system forever, and a single good reading is not trusted alone
//! - Any failure inside the window outweighs successes
//! - Equal timestamps order by executor id, then record position; records
//!   without a parseable timestamp sort oldest

use std::cmp::Ordering;

use crate::health::verdict::HealthVerdict;
use crate::status::heartbeat::{HeartbeatRecord, HeartbeatSnapshot};

/// Number of most-recent records a verdict is based on.
pub const RECENT_WINDOW: usize = 3;

/// Classify a snapshot of executor heartbeat history.
///
/// Pure and borrow-only: the snapshot is neither mutated nor retained.
/// Returns [`HealthVerdict::Unknown`] when no records exist, when the
/// window shows no activity at all, and for every other case the three
/// verdicts cannot distinguish.
pub fn classify_heartbeats(snapshot: &HeartbeatSnapshot) -> HealthVerdict {
    let mut all: Vec<(&str, usize, &HeartbeatRecord)> = snapshot
        .iter()
        .flat_map(|(id, records)| {
            records
                .iter()
                .enumerate()
                .map(move |(pos, record)| (id.as_str(), pos, record))
        })
        .collect();

    all.sort_by(|a, b| compare_recency(a, b));

    let recent: Vec<&HeartbeatRecord> = all
        .iter()
        .take(RECENT_WINDOW)
        .map(|(_, _, record)| *record)
        .collect();

    if recent.is_empty() {
        return HealthVerdict::Unknown;
    }
    if recent.iter().any(|record| record.failed > 0) {
        return HealthVerdict::Degraded;
    }
    if recent.iter().all(|record| record.done > 0) {
        return HealthVerdict::Healthy;
    }
    HealthVerdict::Unknown
}

/// Newest first. `Option<DateTime>` compares `None` lowest, so records
/// without a timestamp land at the end of the ordering.
fn compare_recency(
    a: &(&str, usize, &HeartbeatRecord),
    b: &(&str, usize, &HeartbeatRecord),
) -> Ordering {
    b.2.timestamp
        .cmp(&a.2.timestamp)
        .then_with(|| a.0.cmp(b.0))
        .then_with(|| a.1.cmp(&b.1))
}

//! Version probe classification.

use crate::health::verdict::HealthVerdict;
use crate::status::report::VersionInfo;

/// Classify the version probe.
///
/// A reported error outweighs a cached version string; neither present
/// means the probe has not answered yet.
pub fn classify_version(info: &VersionInfo) -> HealthVerdict {
    if info.error.is_some() {
        return HealthVerdict::Degraded;
    }
    match info.version.as_deref() {
        Some(version) if !version.is_empty() => HealthVerdict::Healthy,
        _ => HealthVerdict::Unknown,
    }
}

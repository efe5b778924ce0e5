//! Verdict vocabulary and its wire color encoding.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Tri-state health classification for a subsystem or a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthVerdict {
    Healthy,
    Degraded,
    Unknown,
}

impl HealthVerdict {
    /// Traffic-light encoding used by collector documents and badge
    /// renderers.
    pub fn color(&self) -> StatusColor {
        match self {
            HealthVerdict::Healthy => StatusColor::Green,
            HealthVerdict::Degraded => StatusColor::Red,
            HealthVerdict::Unknown => StatusColor::Yellow,
        }
    }

    /// Severity rank for worst-of rollups. Higher is worse.
    fn severity(&self) -> u8 {
        match self {
            HealthVerdict::Healthy => 0,
            HealthVerdict::Unknown => 1,
            HealthVerdict::Degraded => 2,
        }
    }

    /// The worse of two verdicts.
    pub fn worst(self, other: HealthVerdict) -> HealthVerdict {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for HealthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthVerdict::Healthy => "healthy",
            HealthVerdict::Degraded => "degraded",
            HealthVerdict::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Traffic-light color carried in collector documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Red,
    Yellow,
}

impl StatusColor {
    /// Parse the collector encoding. Unrecognized colors degrade to
    /// yellow rather than failing the whole document.
    pub fn from_wire(raw: &str) -> StatusColor {
        match raw.trim().to_ascii_lowercase().as_str() {
            "green" => StatusColor::Green,
            "red" => StatusColor::Red,
            _ => StatusColor::Yellow,
        }
    }

    /// Verdict implied by a reported color.
    pub fn verdict(&self) -> HealthVerdict {
        match self {
            StatusColor::Green => HealthVerdict::Healthy,
            StatusColor::Red => HealthVerdict::Degraded,
            StatusColor::Yellow => HealthVerdict::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Yellow => "yellow",
        }
    }
}

impl<'de> Deserialize<'de> for StatusColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(StatusColor::from_wire(&raw))
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_verdict_round_trip() {
        for verdict in [
            HealthVerdict::Healthy,
            HealthVerdict::Degraded,
            HealthVerdict::Unknown,
        ] {
            assert_eq!(verdict.color().verdict(), verdict);
        }
    }

    #[test]
    fn test_worst_prefers_degraded_over_unknown_over_healthy() {
        assert_eq!(
            HealthVerdict::Healthy.worst(HealthVerdict::Unknown),
            HealthVerdict::Unknown
        );
        assert_eq!(
            HealthVerdict::Unknown.worst(HealthVerdict::Degraded),
            HealthVerdict::Degraded
        );
        assert_eq!(
            HealthVerdict::Degraded.worst(HealthVerdict::Healthy),
            HealthVerdict::Degraded
        );
    }

    #[test]
    fn test_unrecognized_wire_color_degrades_to_yellow() {
        assert_eq!(StatusColor::from_wire("GREEN"), StatusColor::Green);
        assert_eq!(StatusColor::from_wire("purple"), StatusColor::Yellow);
        assert_eq!(StatusColor::from_wire(""), StatusColor::Yellow);
    }
}

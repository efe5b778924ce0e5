//! Health classification subsystem.
//!
//! # Data Flow
//! ```text
//! StatusReport (status::report)
//!     → evaluate.rs (per-subsystem dispatch)
//!         → heartbeat.rs (recent-window heartbeat classifier)
//!         → version.rs (version probe classifier)
//!         → verdict.rs (tri-state vocabulary + color encoding)
//!     → ReportEvaluation (overall = worst subsystem verdict)
//! ```
//!
//! # Design Decisions
//! - Verdicts are derived fresh on every evaluation, never stored
//! - Failure evidence always outweighs success evidence
//! - Missing data is Unknown, not an error

pub mod evaluate;
pub mod heartbeat;
pub mod verdict;
pub mod version;

pub use evaluate::{evaluate, ReportEvaluation, SubsystemEvaluation};
pub use heartbeat::classify_heartbeats;
pub use verdict::{HealthVerdict, StatusColor};
pub use version::classify_version;

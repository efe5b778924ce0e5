//! Status document model.
//!
//! # Data Flow
//! ```text
//! collector document (JSON)
//!     → report.rs (tagged SubsystemStatus, version info)
//!     → heartbeat.rs (executor heartbeat history)
//!     → subsystem.rs (subsystem identities + display catalog)
//!     → consumed read-only by health::evaluate and render
//! ```
//!
//! # Design Decisions
//! - The collector's "metrics record or error record" shapes parse into
//!   explicit variants; nothing downstream sniffs for field presence
//! - Missing counts default to zero, unparseable timestamps to absent;
//!   only a syntactically invalid document is an error
//! - Unknown metric fields are preserved for display, never rejected

pub mod heartbeat;
pub mod report;
pub mod subsystem;

pub use heartbeat::{HeartbeatRecord, HeartbeatSnapshot};
pub use report::{StatusReport, SubsystemStatus, TaskExecutorStatus, VersionInfo};
pub use subsystem::Subsystem;

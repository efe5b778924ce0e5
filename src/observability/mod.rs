//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! monitor loop produces:
//!     → logging.rs (structured log events, verdict transitions)
//!     → metrics.rs (evaluation counters, health gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout, remote)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Gauge updates are cheap (atomic stores)
//! - Metrics exposition is optional and off by default

pub mod logging;
pub mod metrics;

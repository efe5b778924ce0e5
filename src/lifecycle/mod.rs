//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → monitor loop drains and exits
//! ```
//!
//! # Design Decisions
//! - One broadcast channel; every long-running task subscribes
//! - Shutdown is cooperative, no forced aborts

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

//! System Status Monitor Library

pub mod config;
pub mod health;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod render;
pub mod status;

pub use config::schema::MonitorConfig;
pub use health::evaluate::{evaluate, ReportEvaluation};
pub use health::verdict::{HealthVerdict, StatusColor};
pub use lifecycle::Shutdown;
pub use monitor::StatusMonitor;
pub use status::report::StatusReport;

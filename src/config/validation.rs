//! Semantic configuration checks.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single failed semantic check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("source.path must not be empty")]
    EmptySourcePath,

    #[error("poll.interval_secs must be greater than zero")]
    ZeroPollInterval,

    #[error("observability.metrics_address is not a socket address: {0}")]
    BadMetricsAddress(String),
}

/// Run all semantic checks, collecting every failure instead of stopping
/// at the first.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.source.path.trim().is_empty() {
        errors.push(ValidationError::EmptySourcePath);
    }
    if config.poll.interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::BadMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MonitorConfig::default()).is_ok());
    }

    #[test]
    fn test_all_failures_are_collected() {
        let mut config = MonitorConfig::default();
        config.source.path = "  ".to_string();
        config.poll.interval_secs = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptySourcePath));
        assert!(errors.contains(&ValidationError::ZeroPollInterval));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = MonitorConfig::default();
        config.observability.metrics_address = "not-an-address".to_string();
        assert!(validate_config(&config).is_ok());
    }
}

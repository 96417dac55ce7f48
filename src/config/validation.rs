//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (warning ratio in (0,1), interval > 0)
//! - Check the metrics address parses when the endpoint is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SentinelConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::SentinelConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `diagnostics.warning_ratio` must be strictly between 0 and 1.
    WarningRatioOutOfRange(f64),
    /// `diagnostics.daily_limit_override` must be positive when set.
    ZeroDailyLimitOverride,
    /// `monitor.interval_secs` must be positive when the monitor is enabled.
    ZeroMonitorInterval,
    /// `observability.metrics_address` must parse as a socket address when
    /// the metrics endpoint is enabled.
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::WarningRatioOutOfRange(ratio) => {
                write!(f, "warning ratio {} is outside (0, 1)", ratio)
            }
            ValidationError::ZeroDailyLimitOverride => {
                write!(f, "daily limit override must be positive")
            }
            ValidationError::ZeroMonitorInterval => {
                write!(f, "monitor interval must be positive")
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid metrics address: {}", addr)
            }
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SentinelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let ratio = config.diagnostics.warning_ratio;
    if !(ratio > 0.0 && ratio < 1.0) {
        errors.push(ValidationError::WarningRatioOutOfRange(ratio));
    }

    if config.diagnostics.daily_limit_override == Some(0) {
        errors.push(ValidationError::ZeroDailyLimitOverride);
    }

    if config.monitor.enabled && config.monitor.interval_secs == 0 {
        errors.push(ValidationError::ZeroMonitorInterval);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
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
        assert!(validate_config(&SentinelConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = SentinelConfig::default();
        config.diagnostics.warning_ratio = 1.0;
        config.diagnostics.daily_limit_override = Some(0);
        config.monitor.interval_secs = 0;
        config.observability.metrics_address = "not-an-address".to_string();

        let errors = validate_config(&config).expect_err("config is invalid");
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::WarningRatioOutOfRange(1.0)));
        assert!(errors.contains(&ValidationError::ZeroMonitorInterval));
    }

    #[test]
    fn test_nan_ratio_is_rejected() {
        let mut config = SentinelConfig::default();
        config.diagnostics.warning_ratio = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_interval_ignored_when_monitor_disabled() {
        let mut config = SentinelConfig::default();
        config.monitor.enabled = false;
        config.monitor.interval_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = SentinelConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());
    }
}

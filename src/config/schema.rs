//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};

use crate::diagnostics::evaluator::BranchOrder;

/// Root configuration for the diagnostics daemon.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SentinelConfig {
    /// Diagnostic check settings.
    pub diagnostics: DiagnosticsConfig,

    /// Periodic monitor settings.
    pub monitor: MonitorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Settings for the built-in diagnostic checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Fraction of the daily limit at which the WARNING severity starts.
    /// Must be strictly between 0 and 1.
    pub warning_ratio: f64,

    /// Branch ordering for the rate-limit classification. `legacy` keeps the
    /// original integration's behavior (WARNING past the limit);
    /// `corrected` reports ERROR once the limit is exceeded.
    pub branch_order: BranchOrder,

    /// Override for the vendor's daily tag-purge limit. Leave unset to use
    /// the published Cloudflare constant.
    pub daily_limit_override: Option<u32>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            warning_ratio: 0.75,
            branch_order: BranchOrder::Legacy,
            daily_limit_override: None,
        }
    }
}

/// Periodic monitor settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Enable the periodic diagnostic loop.
    pub enabled: bool,

    /// Seconds between diagnostic passes.
    pub interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 60,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_integration() {
        let config = SentinelConfig::default();
        assert_eq!(config.diagnostics.warning_ratio, 0.75);
        assert_eq!(config.diagnostics.branch_order, BranchOrder::Legacy);
        assert_eq!(config.diagnostics.daily_limit_override, None);
        assert!(config.monitor.enabled);
        assert_eq!(config.monitor.interval_secs, 60);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: SentinelConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.diagnostics.warning_ratio, 0.75);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_branch_order_parses_lowercase() {
        let config: SentinelConfig = toml::from_str(
            r#"
            [diagnostics]
            branch_order = "corrected"
            warning_ratio = 0.5
            "#,
        )
        .expect("valid config parses");
        assert_eq!(config.diagnostics.branch_order, BranchOrder::Corrected);
        assert_eq!(config.diagnostics.warning_ratio, 0.5);
    }
}

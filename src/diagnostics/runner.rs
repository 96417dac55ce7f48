//! Runs the configured checks and aggregates a report.

use serde::Serialize;

use crate::config::schema::DiagnosticsConfig;
use crate::diagnostics::checks::{CredentialCheck, DailyLimitCheck, DiagnosticCheck};
use crate::diagnostics::evaluator::DiagnosticsResult;
use crate::diagnostics::severity::{CheckResult, Severity};
use crate::observability::metrics;
use crate::providers::{FixedLimits, ProviderSet, RateLimits};
use std::sync::Arc;

/// Outcome of one check within a report.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Aggregated outcome of a full diagnostic pass.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub results: Vec<CheckOutcome>,
    pub worst: Severity,
}

impl DiagnosticReport {
    /// A report from before the first pass has run.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            worst: Severity::Ok,
        }
    }
}

/// Executes a set of diagnostic checks in order.
pub struct DiagnosticRunner {
    checks: Vec<Box<dyn DiagnosticCheck>>,
}

impl DiagnosticRunner {
    /// Create a runner over an explicit set of checks.
    pub fn new(checks: Vec<Box<dyn DiagnosticCheck>>) -> Self {
        Self { checks }
    }

    /// Build the built-in checks from configuration and provider seams.
    ///
    /// A configured `daily_limit_override` takes precedence over the
    /// provider's vendor constant.
    pub fn from_config(config: &DiagnosticsConfig, providers: &ProviderSet) -> Self {
        let limits: Arc<dyn RateLimits> = match config.daily_limit_override {
            Some(limit) => Arc::new(FixedLimits::new(limit)),
            None => providers.limits.clone(),
        };

        Self::new(vec![
            Box::new(DailyLimitCheck::new(
                providers.counter.clone(),
                limits,
                config.warning_ratio,
                config.branch_order,
            )),
            Box::new(CredentialCheck::new(providers.credentials.clone())),
        ])
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check and aggregate the worst severity.
    ///
    /// A check failing with `InvalidConfiguration` aborts the pass: a broken
    /// health check must surface as broken, not as a severity.
    pub fn run_all(&self) -> DiagnosticsResult<DiagnosticReport> {
        let mut results = Vec::with_capacity(self.checks.len());
        let mut worst = Severity::Ok;

        for check in &self.checks {
            let result = check.run()?;

            match result.severity {
                Severity::Ok => tracing::debug!(
                    check = check.id(),
                    message = %result.message.render(),
                    "Diagnostic check passed"
                ),
                Severity::Warning => tracing::warn!(
                    check = check.id(),
                    observed = ?result.observed_value,
                    message = %result.message.render(),
                    "Diagnostic check warning"
                ),
                Severity::Error => tracing::error!(
                    check = check.id(),
                    observed = ?result.observed_value,
                    message = %result.message.render(),
                    "Diagnostic check failed"
                ),
            }
            metrics::record_check_severity(check.id(), result.severity);

            worst = worst.max(result.severity);
            results.push(CheckOutcome {
                id: check.id(),
                title: check.title(),
                result,
            });
        }

        metrics::record_run(worst);
        Ok(DiagnosticReport { results, worst })
    }
}

//! Pure severity evaluation for the built-in checks.
//!
//! # Responsibilities
//! - Classify a purge counter against a daily rate limit (OK/WARNING/ERROR)
//! - Classify credential validity (OK/ERROR)
//! - Reject parameters for which no severity is meaningful
//!
//! # Design Decisions
//! - Both evaluators are pure functions: no I/O, no clock, no hidden state
//! - The legacy integration classified counts past the limit as WARNING
//!   because its over-limit branch was ordered after the warning branch;
//!   [`BranchOrder`] keeps that behavior selectable instead of silently
//!   changing severities under existing alerting rules

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::severity::{CheckResult, Message, Severity};

/// Branch ordering for the rate-limit classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchOrder {
    /// Original ordering: the warning branch matches every count at or above
    /// the threshold, so counts past the limit still classify as WARNING.
    #[default]
    Legacy,
    /// Over-limit counts classify as ERROR before the warning branch runs.
    Corrected,
}

/// Errors raised by the diagnostics subsystem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosticsError {
    /// Check parameters outside the domain where a severity is meaningful.
    /// Not recoverable locally; a misconfigured check must surface as broken
    /// rather than report a wrong severity.
    #[error("invalid diagnostic configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for diagnostic operations.
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// Classify a purge counter against the daily rate limit.
///
/// `warning_ratio` is the fraction of `limit` at which the WARNING severity
/// starts. Fails fast with [`DiagnosticsError::InvalidConfiguration`] when
/// `limit` is zero or `warning_ratio` is outside (0, 1).
pub fn evaluate_rate_limit(
    count: u64,
    limit: u32,
    warning_ratio: f64,
    order: BranchOrder,
) -> DiagnosticsResult<CheckResult> {
    if limit == 0 {
        return Err(DiagnosticsError::InvalidConfiguration(
            "daily rate limit must be positive".to_string(),
        ));
    }
    if !(warning_ratio > 0.0 && warning_ratio < 1.0) {
        return Err(DiagnosticsError::InvalidConfiguration(format!(
            "warning ratio {} is outside (0, 1)",
            warning_ratio
        )));
    }

    let threshold = warning_ratio * f64::from(limit);

    let result = match order {
        BranchOrder::Legacy => {
            if (count as f64) < threshold {
                CheckResult::new(Severity::Ok, safely_below(limit))
            } else if (count as f64) >= threshold {
                CheckResult::new(Severity::Warning, approaching_limit(count, limit))
            } else if count > u64::from(limit) {
                // Unreachable: the warning arm already matched every count at
                // or above the threshold. Kept to mirror the legacy ordering.
                CheckResult::new(Severity::Error, past_limit(count, limit))
            } else {
                CheckResult::new(Severity::Ok, safely_below(limit))
            }
        }
        BranchOrder::Corrected => {
            if count > u64::from(limit) {
                CheckResult::new(Severity::Error, past_limit(count, limit))
            } else if (count as f64) >= threshold {
                CheckResult::new(Severity::Warning, approaching_limit(count, limit))
            } else {
                CheckResult::new(Severity::Ok, safely_below(limit))
            }
        }
    };

    Ok(result.with_observed(count))
}

/// Classify the stored credential-validity flag.
pub fn evaluate_credentials(valid: bool) -> CheckResult {
    if !valid {
        return CheckResult::new(
            Severity::Error,
            Message::new("Invalid API credentials."),
        );
    }
    CheckResult::new(
        Severity::Ok,
        Message::new("Valid API credentials detected."),
    )
}

fn safely_below(limit: u32) -> Message {
    Message::new("Site is safely below the daily limit of :daily_limit tag purges/day.")
        .arg(":daily_limit", limit)
}

fn approaching_limit(count: u64, limit: u32) -> Message {
    Message::new("Approaching API limit of :daily_count/:daily_limit tag purges/day.")
        .arg(":daily_count", count)
        .arg(":daily_limit", limit)
}

fn past_limit(count: u64, limit: u32) -> Message {
    Message::new("Past API limit of :daily_count/:daily_limit tag purges/day.")
        .arg(":daily_count", count)
        .arg(":daily_limit", limit)
}

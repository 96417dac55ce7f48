//! Built-in diagnostic checks.

use std::sync::Arc;

use crate::diagnostics::evaluator::{
    evaluate_credentials, evaluate_rate_limit, BranchOrder, DiagnosticsResult,
};
use crate::diagnostics::severity::CheckResult;
use crate::providers::{CredentialState, PurgeCounter, RateLimits};

/// A single read-only diagnostic check.
///
/// Implementations hold their collaborators by constructor injection and
/// must stay free of side effects; [`run`](DiagnosticCheck::run) may be
/// invoked concurrently from any number of callers.
pub trait DiagnosticCheck: Send + Sync {
    /// Stable machine identifier, used for log fields and metric labels.
    fn id(&self) -> &'static str;

    /// Human-readable title for report rendering.
    fn title(&self) -> &'static str;

    /// Execute the check against current provider state.
    fn run(&self) -> DiagnosticsResult<CheckResult>;
}

/// Checks how close the site is to the vendor's daily tag-purge limit.
///
/// Warns once the counter reaches `warning_ratio` of the limit.
pub struct DailyLimitCheck {
    counter: Arc<dyn PurgeCounter>,
    limits: Arc<dyn RateLimits>,
    warning_ratio: f64,
    order: BranchOrder,
}

impl DailyLimitCheck {
    pub fn new(
        counter: Arc<dyn PurgeCounter>,
        limits: Arc<dyn RateLimits>,
        warning_ratio: f64,
        order: BranchOrder,
    ) -> Self {
        Self {
            counter,
            limits,
            warning_ratio,
            order,
        }
    }
}

impl DiagnosticCheck for DailyLimitCheck {
    fn id(&self) -> &'static str {
        "daily_limit"
    }

    fn title(&self) -> &'static str {
        "Daily Tag Purge Limit"
    }

    fn run(&self) -> DiagnosticsResult<CheckResult> {
        let count = self.counter.tag_purge_daily_count();
        let limit = self.limits.tag_purge_daily_limit();
        evaluate_rate_limit(count, limit, self.warning_ratio, self.order)
    }
}

/// Checks whether the stored API credentials were last verified as valid.
pub struct CredentialCheck {
    credentials: Arc<dyn CredentialState>,
}

impl CredentialCheck {
    pub fn new(credentials: Arc<dyn CredentialState>) -> Self {
        Self { credentials }
    }
}

impl DiagnosticCheck for CredentialCheck {
    fn id(&self) -> &'static str {
        "credentials"
    }

    fn title(&self) -> &'static str {
        "API Credentials"
    }

    fn run(&self) -> DiagnosticsResult<CheckResult> {
        Ok(evaluate_credentials(self.credentials.credentials_valid()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::severity::Severity;
    use crate::providers::{CloudflareLimits, InMemoryState};

    fn daily_limit_check(state: Arc<InMemoryState>) -> DailyLimitCheck {
        DailyLimitCheck::new(
            state,
            Arc::new(CloudflareLimits),
            0.75,
            BranchOrder::Legacy,
        )
    }

    #[test]
    fn test_daily_limit_check_reads_counter() {
        let state = Arc::new(InMemoryState::new());
        let check = daily_limit_check(state.clone());

        let result = check.run().expect("check is well configured");
        assert_eq!(result.severity, Severity::Ok);

        for _ in 0..150 {
            state.record_tag_purge();
        }
        let result = check.run().expect("check is well configured");
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.observed_value, Some(150));
    }

    #[test]
    fn test_daily_limit_check_propagates_invalid_ratio() {
        let state = Arc::new(InMemoryState::new());
        let check = DailyLimitCheck::new(
            state,
            Arc::new(CloudflareLimits),
            1.0,
            BranchOrder::Legacy,
        );
        assert!(check.run().is_err());
    }

    #[test]
    fn test_credential_check_follows_stored_flag() {
        let state = Arc::new(InMemoryState::new());
        let check = CredentialCheck::new(state.clone());

        assert_eq!(check.run().expect("infallible").severity, Severity::Error);

        state.set_credentials_valid(true);
        assert_eq!(check.run().expect("infallible").severity, Severity::Ok);
    }

    #[test]
    fn test_check_identifiers_are_stable() {
        let state = Arc::new(InMemoryState::new());
        assert_eq!(daily_limit_check(state.clone()).id(), "daily_limit");
        assert_eq!(CredentialCheck::new(state).id(), "credentials");
    }
}

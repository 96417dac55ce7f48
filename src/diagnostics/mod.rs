//! Diagnostics subsystem.
//!
//! # Data Flow
//! ```text
//! Providers (purge counter, rate limits, credential state)
//!     → checks.rs (DailyLimitCheck, CredentialCheck)
//!     → evaluator.rs (pure severity classification)
//!     → runner.rs (aggregate into DiagnosticReport)
//!     → monitor.rs (periodic re-run, snapshot swap)
//! ```
//!
//! # Design Decisions
//! - Evaluation is pure: severity is a total function of its direct inputs
//! - Checks receive collaborators via constructor injection, no registry
//! - Rate-limit branch ordering is selectable to stay compatible with the
//!   legacy integration (see [`evaluator::BranchOrder`])
//! - A misconfigured check fails loudly instead of reporting a severity

pub mod checks;
pub mod evaluator;
pub mod monitor;
pub mod runner;
pub mod severity;

pub use evaluator::{BranchOrder, DiagnosticsError, DiagnosticsResult};
pub use monitor::DiagnosticMonitor;
pub use runner::{DiagnosticReport, DiagnosticRunner};
pub use severity::{CheckResult, Message, Severity};

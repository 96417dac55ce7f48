//! Health diagnostics for CDN cache-purge integrations.

pub mod config;
pub mod diagnostics;
pub mod lifecycle;
pub mod observability;
pub mod providers;

pub use config::schema::SentinelConfig;
pub use diagnostics::runner::{DiagnosticReport, DiagnosticRunner};
pub use diagnostics::severity::{CheckResult, Severity};
pub use lifecycle::Shutdown;

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Diagnostic runs produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (severity gauges, run counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; level from env with config fallback
//! - Metric updates are cheap and fire on every diagnostic pass
//! - Without an installed recorder the metric calls are no-ops, so the
//!   library works unchanged inside hosts that bring their own exporter

pub mod logging;
pub mod metrics;

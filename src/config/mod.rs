//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SentinelConfig (validated, immutable)
//!     → shared with the monitor and observability setup
//!
//! On reload:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → monitor receives update over channel
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes flow as whole new configs
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{DiagnosticsConfig, MonitorConfig, ObservabilityConfig, SentinelConfig};
pub use watcher::ConfigWatcher;

//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init observability → Start monitor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast to monitor → loop exits → join
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;

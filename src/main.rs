//! CDN purge diagnostics daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │                 PURGE SENTINEL                    │
//!                 │                                                   │
//!   purge events  │  ┌───────────┐   ┌────────────┐   ┌───────────┐  │
//!   ─────────────▶│  │ providers │──▶│ diagnostics│──▶│  monitor  │  │
//!   (embedding    │  │  (state)  │   │ checks +   │   │ periodic  │  │
//!    application) │  └───────────┘   │ evaluator  │   │ loop      │  │
//!                 │                  └────────────┘   └─────┬─────┘  │
//!                 │                                         │        │
//!                 │  ┌────────────────────────────────────┐ ▼        │
//!                 │  │        Cross-Cutting Concerns      │ report   │
//!                 │  │  ┌────────┐ ┌─────────┐ ┌───────┐ │ snapshot │
//!                 │  │  │ config │ │ logging │ │metrics│ │          │
//!                 │  │  └────────┘ └─────────┘ └───────┘ │          │
//!                 │  └────────────────────────────────────┘          │
//!                 └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;

use purge_sentinel::config::{load_config, ConfigWatcher, SentinelConfig};
use purge_sentinel::diagnostics::{DiagnosticMonitor, DiagnosticRunner};
use purge_sentinel::lifecycle::Shutdown;
use purge_sentinel::observability;
use purge_sentinel::providers::{InMemoryState, ProviderSet};
use purge_sentinel::Severity;

#[derive(Parser)]
#[command(name = "purge-sentinel")]
#[command(about = "Health diagnostics for CDN cache-purge integrations", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single diagnostic pass, print the report as JSON and exit
    /// with 0 (ok), 1 (warning) or 2 (error).
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SentinelConfig::default(),
    };

    observability::logging::init_logging(&config.observability.log_level);

    tracing::info!("purge-sentinel v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        interval = config.monitor.interval_secs,
        warning_ratio = config.diagnostics.warning_ratio,
        branch_order = ?config.diagnostics.branch_order,
        "Configuration loaded"
    );

    // The in-memory store is the seam where an embedding application wires
    // its own counter and credential providers.
    let providers = ProviderSet::in_memory(Arc::new(InMemoryState::new()));

    if cli.once {
        let runner = DiagnosticRunner::from_config(&config.diagnostics, &providers);
        let report = runner.run_all()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        let code = match report.worst {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        };
        std::process::exit(code);
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Keep the filesystem watcher alive for the daemon's lifetime.
    let mut _fs_watcher = None;
    let config_updates = match &cli.config {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            _fs_watcher = Some(watcher.run()?);
            updates
        }
        None => mpsc::unbounded_channel().1,
    };

    let shutdown = Shutdown::new();
    let monitor = DiagnosticMonitor::new(providers, config);
    let monitor_shutdown = shutdown.subscribe();
    let monitor_task = tokio::spawn(monitor.run(config_updates, monitor_shutdown));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
    monitor_task.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Periodic diagnostic monitoring.
//!
//! # Responsibilities
//! - Re-run the diagnostic checks on a fixed interval
//! - Publish the latest report through an atomically swappable snapshot
//! - Apply validated config reloads without restart
//!
//! # Design Decisions
//! - The monitor is the only writer of the snapshot; readers load freely
//! - A failed pass keeps the previous report in place
//! - Severity transitions are logged once, at the new severity's level

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use tokio::sync::{broadcast, mpsc};
use tokio::time;

use crate::config::schema::SentinelConfig;
use crate::diagnostics::runner::{DiagnosticReport, DiagnosticRunner};
use crate::diagnostics::severity::Severity;
use crate::providers::ProviderSet;

/// Periodically runs the diagnostics and publishes the latest report.
pub struct DiagnosticMonitor {
    providers: ProviderSet,
    config: SentinelConfig,
    runner: DiagnosticRunner,
    snapshot: Arc<ArcSwap<DiagnosticReport>>,
}

impl DiagnosticMonitor {
    /// Create a monitor with checks built from `config`.
    pub fn new(providers: ProviderSet, config: SentinelConfig) -> Self {
        let runner = DiagnosticRunner::from_config(&config.diagnostics, &providers);
        Self {
            providers,
            config,
            runner,
            snapshot: Arc::new(ArcSwap::from_pointee(DiagnosticReport::empty())),
        }
    }

    /// Handle to the latest published report.
    pub fn snapshot(&self) -> Arc<ArcSwap<DiagnosticReport>> {
        self.snapshot.clone()
    }

    /// Run the monitor loop until shutdown.
    pub async fn run(
        mut self,
        mut config_updates: mpsc::UnboundedReceiver<SentinelConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        if !self.config.monitor.enabled {
            tracing::info!("Diagnostic monitor disabled");
            return;
        }

        tracing::info!(
            interval = self.config.monitor.interval_secs,
            warning_ratio = self.config.diagnostics.warning_ratio,
            "Diagnostic monitor starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.monitor.interval_secs));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_once();
                }
                Some(new_config) = config_updates.recv() => {
                    // Validated upstream; interval 0 never reaches here.
                    if new_config.monitor.interval_secs != self.config.monitor.interval_secs {
                        ticker = time::interval(Duration::from_secs(new_config.monitor.interval_secs));
                    }
                    self.runner = DiagnosticRunner::from_config(&new_config.diagnostics, &self.providers);
                    tracing::info!(
                        interval = new_config.monitor.interval_secs,
                        warning_ratio = new_config.diagnostics.warning_ratio,
                        "Applied new configuration"
                    );
                    self.config = new_config;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Diagnostic monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn run_once(&self) {
        match self.runner.run_all() {
            Ok(report) => {
                let previous = self.snapshot.load().worst;
                if previous != report.worst {
                    match report.worst {
                        Severity::Ok => tracing::info!(
                            from = %previous,
                            "Diagnostics recovered"
                        ),
                        Severity::Warning => tracing::warn!(
                            from = %previous,
                            "Diagnostics degraded to warning"
                        ),
                        Severity::Error => tracing::error!(
                            from = %previous,
                            "Diagnostics degraded to error"
                        ),
                    }
                }
                self.snapshot.store(Arc::new(report));
            }
            Err(e) => {
                tracing::error!(error = %e, "Diagnostic pass failed, keeping previous report");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::InMemoryState;
    use tokio::time::timeout;

    fn test_setup() -> (Arc<InMemoryState>, SentinelConfig) {
        let state = Arc::new(InMemoryState::new());
        let mut config = SentinelConfig::default();
        config.monitor.interval_secs = 1;
        (state, config)
    }

    #[tokio::test]
    async fn test_snapshot_published_after_first_tick() {
        let (state, config) = test_setup();
        state.set_credentials_valid(true);

        let monitor = DiagnosticMonitor::new(ProviderSet::in_memory(state), config);
        let snapshot = monitor.snapshot();

        let (_config_tx, config_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = tokio::spawn(monitor.run(config_rx, shutdown_rx));

        // First tick fires immediately.
        tokio::time::sleep(Duration::from_millis(200)).await;
        let report = snapshot.load_full();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.worst, Severity::Ok);

        shutdown_tx.send(()).expect("monitor is subscribed");
        timeout(Duration::from_secs(2), handle)
            .await
            .expect("monitor exits on shutdown")
            .expect("monitor task does not panic");
    }

    #[tokio::test]
    async fn test_disabled_monitor_returns_immediately() {
        let (state, mut config) = test_setup();
        config.monitor.enabled = false;

        let monitor = DiagnosticMonitor::new(ProviderSet::in_memory(state), config);
        let (_config_tx, config_rx) = mpsc::unbounded_channel();
        let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);

        timeout(Duration::from_secs(1), monitor.run(config_rx, shutdown_rx))
            .await
            .expect("disabled monitor returns without shutdown");
    }

    #[tokio::test]
    async fn test_config_update_changes_classification() {
        let (state, config) = test_setup();
        state.set_credentials_valid(true);
        for _ in 0..150 {
            state.record_tag_purge();
        }

        let monitor = DiagnosticMonitor::new(ProviderSet::in_memory(state), config.clone());
        let snapshot = monitor.snapshot();

        let (config_tx, config_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = tokio::spawn(monitor.run(config_rx, shutdown_rx));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(snapshot.load().worst, Severity::Warning);

        // Raise the warning threshold past the current count.
        let mut relaxed = config;
        relaxed.diagnostics.warning_ratio = 0.9;
        config_tx.send(relaxed).expect("monitor is listening");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(snapshot.load().worst, Severity::Ok);

        shutdown_tx.send(()).expect("monitor is subscribed");
        timeout(Duration::from_secs(2), handle)
            .await
            .expect("monitor exits on shutdown")
            .expect("monitor task does not panic");
    }
}

//! Config file loading and hot-reload tests.

use std::fs;
use std::time::Duration;

use purge_sentinel::config::{load_config, ConfigError, ConfigWatcher};
use tempfile::NamedTempFile;
use tokio::time::timeout;

const VALID_CONFIG: &str = r#"
[diagnostics]
warning_ratio = 0.8
branch_order = "corrected"

[monitor]
interval_secs = 30

[observability]
metrics_enabled = false
"#;

#[test]
fn test_load_valid_config_file() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), VALID_CONFIG).expect("write config");

    let config = load_config(file.path()).expect("config loads");
    assert_eq!(config.diagnostics.warning_ratio, 0.8);
    assert_eq!(config.monitor.interval_secs, 30);
}

#[test]
fn test_out_of_range_ratio_fails_validation() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), "[diagnostics]\nwarning_ratio = 1.5\n").expect("write config");

    let err = load_config(file.path()).expect_err("ratio 1.5 is invalid");
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("warning ratio"));
}

#[test]
fn test_malformed_toml_fails_parse() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), "[diagnostics\nwarning_ratio = ").expect("write config");

    let err = load_config(file.path()).expect_err("malformed TOML");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_fails_io() {
    let err = load_config(std::path::Path::new("/nonexistent/sentinel.toml"))
        .expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[tokio::test]
async fn test_watcher_pushes_validated_reload() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), VALID_CONFIG).expect("write config");

    let (watcher, mut updates) = ConfigWatcher::new(file.path());
    let _watcher = watcher.run().expect("watcher starts");

    fs::write(
        file.path(),
        "[diagnostics]\nwarning_ratio = 0.5\n[observability]\nmetrics_enabled = false\n",
    )
    .expect("rewrite config");

    let reloaded = timeout(Duration::from_secs(5), updates.recv())
        .await
        .expect("reload arrives")
        .expect("channel open");
    assert_eq!(reloaded.diagnostics.warning_ratio, 0.5);
}

#[tokio::test]
async fn test_watcher_drops_invalid_reload() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), VALID_CONFIG).expect("write config");

    let (watcher, mut updates) = ConfigWatcher::new(file.path());
    let _watcher = watcher.run().expect("watcher starts");

    fs::write(file.path(), "[diagnostics]\nwarning_ratio = 0.0\n").expect("rewrite config");

    // The invalid file must not surface as an update.
    let result = timeout(Duration::from_secs(2), updates.recv()).await;
    assert!(result.is_err(), "invalid config was pushed to the monitor");
}

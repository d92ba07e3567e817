//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating log file.

use super::file_writer::FileWriter;
use crate::infrastructure::{data_dir, expand_tilde};
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "hrdesk.log";

/// Level used when the config sets none.
pub const DEFAULT_LEVEL: &str = "info";

/// Resolves the log file path: `config.log_file` or `<data dir>/hrdesk.log`.
#[must_use]
pub fn log_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || data_dir().join(LOG_FILE_NAME),
        |path| PathBuf::from(expand_tilde(path)),
    )
}

/// Initializes the tracing subscriber with a rotating file sink.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them as plain text lines (no ANSI colors)
/// 3. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set (any `EnvFilter` directive works, such as
///    `"hrdesk::storage=trace,info"`)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use hrdesk::observability::init_tracing;
/// use hrdesk::Config;
///
/// let dir = std::env::temp_dir();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.join("hrdesk-init.log").to_string_lossy().into_owned()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let path = log_path(config);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(path));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_prefers_config() {
        let config = Config {
            log_file: Some("/tmp/desk/custom.log".into()),
            ..Config::default()
        };
        assert_eq!(log_path(&config), PathBuf::from("/tmp/desk/custom.log"));
        assert!(log_path(&Config::default()).ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            trace_level: Some("not a [valid directive".into()),
            log_file: Some(dir.path().join("nested/hrdesk.log").to_string_lossy().into_owned()),
            ..Config::default()
        };

        init_tracing(&config);
        init_tracing(&config);

        assert!(dir.path().join("nested").is_dir());
    }
}

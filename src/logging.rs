//! Structured logging setup.
//!
//! The game emits `tracing` events from the core; this module decides where
//! they go. The terminal is taken over by the UI, so events are written to a
//! file or not at all.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` without installing anything when no log file is
/// configured. `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::LogFile {
            path: path.clone(),
            source: e,
        })?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::Validation(format!("logging.level: {e}")))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(installed)
}

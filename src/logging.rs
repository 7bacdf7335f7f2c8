//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so all logging goes to a file.
//! Default location: ~/.local/share/focustick/focustick.log

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Get the default log file path
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("focustick");
    Ok(data_dir.join("focustick.log"))
}

/// Install the global subscriber writing to `log_path`.
///
/// RUST_LOG takes precedence over `default_level`.
pub fn init(log_path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let log_file = File::create(log_path)
        .with_context(|| format!("Failed to create log file {:?}", log_path))?;

    build_subscriber(log_file, resolve_filter(default_level))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

/// Filter from RUST_LOG, falling back to `default_level`
pub fn resolve_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Build a subscriber writing plain text to `log_file`
pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_writes_enabled_levels() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap(), EnvFilter::new("info"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Countdown started");
            tracing::debug!("Tick detail");
        });

        let contents = fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("Countdown started"));
        assert!(contents.contains("INFO"));
        assert!(!contents.contains("Tick detail"));
    }

    #[test]
    fn test_debug_level_includes_debug() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap(), EnvFilter::new("debug"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("Tick detail");
        });

        let contents = fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("Tick detail"));
    }

    #[test]
    fn test_default_log_path_name() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("focustick/focustick.log"));
        }
    }
}

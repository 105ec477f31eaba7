//! Diagnostic logging to disk.
//!
//! The terminal is in raw mode while the dialog runs, so `tracing` output is
//! written to a plain text file instead (default:
//! `~/.local/share/replacepoint-demo/debug.log`). With `daily = true` the
//! current date is appended to the file stem.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Resolve the log file path for `config`, relative to `data_dir`.
pub fn log_path(config: &LoggingConfig, data_dir: &Path) -> PathBuf {
    let path = if config.log_file.is_absolute() {
        config.log_file.clone()
    } else {
        data_dir.join(&config.log_file)
    };
    if !config.daily {
        return path;
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "debug".to_string());
    let filename = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, date, ext.to_string_lossy()),
        None => format!("{}_{}", stem, date),
    };
    path.with_file_name(filename)
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig, data_dir: &Path) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_path(config, data_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

//! File logging.
//!
//! The browser owns the terminal, so log lines go to a file instead of
//! stderr. `RUST_LOG` overrides `--log-level` when set.

use crate::types::LogLevel;
use anyhow::{anyhow, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use vsview_runtime::config::expand_tilde;

pub fn default_log_path() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow!("no state or cache directory for the log file"))?;
    Ok(base.join("vsview").join("vsview.log"))
}

/// Directives for our own crates at `level`; dependencies stay at warn.
pub fn default_directives(level: LogLevel) -> String {
    format!(
        "warn,vsview={0},vsview_client={0},vsview_runtime={0}",
        level
    )
}

pub fn init(level: LogLevel, log_file: Option<&str>) -> Result<PathBuf> {
    let path = match log_file {
        Some(path) => expand_tilde(path),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(path)
}

//! File logging for the binary.
//!
//! The game owns the whole terminal, so logs never go to stdout/stderr. A fmt
//! subscriber is installed only when a log file is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `SNAKE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("SNAKE_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path` (appending).
///
/// Returns `Ok(false)` when `path` is `None` and nothing was installed.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    Ok(true)
}

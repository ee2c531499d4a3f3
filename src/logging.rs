//! Tracing setup. The terminal belongs to the UI, so events go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingConfig};

const ENV_FILTER: &str = "TOV_LOG";

/// Install the global subscriber; returns the log file in use
pub fn init(logging: &LoggingConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config::log_file_path(logging) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))?;

    Ok(Some(path))
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(ENV_FILTER).unwrap_or_else(|_| {
        let level = logging.level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

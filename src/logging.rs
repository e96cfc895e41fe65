//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects the filter, `info` by default. The terminal UI logs to
//! a file so output does not corrupt the screen; plain commands log to
//! stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;

const LOG_FILE: &str = "ccexplorer.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr.
pub fn init_stderr() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging unavailable: {e}");
    }
}

/// Log to `<cache dir>/ccexplorer/ccexplorer.log`.
///
/// # Errors
///
/// Returns an error if the cache directory is unknown or the log file
/// cannot be opened.
///
/// # Returns
///
/// The path of the log file.
pub fn init_file() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| eyre!("Could not determine cache directory"))?
        .join(APP_NAME);
    fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("{e}"))?;

    Ok(path)
}

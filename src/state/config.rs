//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/ccexplorer/config.json`
//! - macOS: `~/Library/Application Support/ccexplorer/config.json`
//! - Windows: `%APPDATA%/ccexplorer/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.indexer_url = "https://corgi.codechain.io/explorer/api".to_string();
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{APP_NAME, DEFAULT_INDEXER_URL, DEFAULT_SYNC_POLL_SECS};

use super::pagination::PageSize;

// ============================================================================
// Constants
// ============================================================================

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

fn default_indexer_url() -> String {
    DEFAULT_INDEXER_URL.to_string()
}

const fn default_items_per_page() -> u64 {
    PageSize::TwentyFive.value()
}

const fn default_sync_poll_secs() -> u64 {
    DEFAULT_SYNC_POLL_SECS
}

/// Application configuration structure for persistence.
///
/// Missing fields take their defaults, so older or hand-written files keep
/// loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the indexer API.
    #[serde(default = "default_indexer_url")]
    pub indexer_url: String,
    /// Default list page size. Values outside 25/50/75/100 fall back to 25.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,
    /// Seconds between sync status polls.
    #[serde(default = "default_sync_poll_secs")]
    pub sync_poll_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            indexer_url: default_indexer_url(),
            items_per_page: default_items_per_page(),
            sync_poll_secs: default_sync_poll_secs(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or written.
    ///
    /// # Returns
    ///
    /// The path written to.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration to `path` as pretty JSON, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_indexer_url(mut self, indexer_url: Option<String>) -> Self {
        if let Some(url) = indexer_url {
            self.indexer_url = url;
        }
        self
    }

    /// Configured page size, or the default if the value is not allowed.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::from_value(self.items_per_page).unwrap_or_else(|| {
            tracing::debug!(
                "items_per_page {} is not allowed, using default",
                self.items_per_page
            );
            PageSize::default()
        })
    }

    /// Sync poll interval, at least one second.
    #[must_use]
    pub fn sync_poll_interval(&self) -> Duration {
        Duration::from_secs(self.sync_poll_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================

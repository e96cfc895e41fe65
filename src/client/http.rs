//! HTTP client construction and URL helpers for indexer requests.

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::domain::ExplorerError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Idle pooled connections are dropped after this many seconds
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: 4,
        }
    }
}

impl HttpConfig {
    /// Build a pooled reqwest client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the TLS backend cannot be set up.
    pub fn build_client(&self) -> Result<Client, ExplorerError> {
        Client::builder()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(self.timeout)
            .build()
            .map_err(|e| ExplorerError::client_init(e.to_string()))
    }
}

// ============================================================================
// URL Helpers
// ============================================================================

/// Parse an indexer base URL, making sure it ends with `/` so that
/// relative endpoints are appended instead of replacing the last segment.
///
/// # Errors
///
/// Returns `ExplorerError::InvalidInput` if `base` is not an absolute URL.
pub fn parse_base_url(base: &str) -> Result<Url, ExplorerError> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };

    let url = Url::parse(&normalized)
        .map_err(|e| ExplorerError::invalid_input(format!("indexer URL '{base}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ExplorerError::invalid_input(format!(
            "indexer URL '{base}' cannot have endpoints"
        )));
    }
    Ok(url)
}

/// Join an endpoint path and query parameters onto a base URL.
///
/// # Errors
///
/// Returns `ExplorerError::InvalidInput` if `path` is not a valid relative URL.
pub fn endpoint_url(base: &Url, path: &str, query: &[(&str, String)]) -> Result<Url, ExplorerError> {
    let mut url = base
        .join(path)
        .map_err(|e| ExplorerError::invalid_input(format!("endpoint '{path}': {e}")))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

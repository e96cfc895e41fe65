//! Error types for indexer and domain operations.
//!
//! This module defines the error types used when talking to the indexer API
//! and when turning its JSON documents into domain values.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for indexer client and parsing operations.
///
/// Parse errors mean the indexer broke its own data contract (for example a
/// `mintAsset` document without its `mintAsset` payload). They are surfaced
/// to the caller instead of being patched over.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The indexer answered with a non-success status code.
    #[error("Indexer returned HTTP {status} for {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found on the indexer.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "transaction", "block").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client initialization failed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl ExplorerError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

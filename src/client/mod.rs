//! HTTP client for the CodeChain indexer API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::IndexerClient;
//!
//! let indexer = IndexerClient::new("http://localhost:8081/api")?;
//! let tx = indexer.get_transaction("0xab12...").await?;
//! ```

pub mod http;
pub mod indexer;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use indexer::IndexerClient;

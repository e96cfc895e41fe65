//! Domain types for the CodeChain explorer.
//!
//! This module contains the pure data types the explorer works with: the
//! transaction variant model, blocks, indexer sync status, amounts, asset
//! metadata and script decoding.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for indexer and parsing operations
//! - [`amount`] - Quark to CCC conversion
//! - [`metadata`] - Defensive asset metadata parsing
//! - [`script`] - Lock/unlock script decoding seam
//! - [`transaction`] - Transaction types and parsing
//! - [`block`] - Blocks and indexer sync status

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod block;
pub mod error;
pub mod metadata;
pub mod script;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{FormatError, format_ccc, quark_to_ccc};
pub use block::{Block, SyncStatus};
pub use error::ExplorerError;
pub use metadata::AssetMetadata;
pub use script::{HexScriptDecoder, ScriptDecoder};
pub use transaction::{
    AssetTransferInput, AssetTransferOutput, Transaction, TransactionDetails, TxStatus, TxType,
    format_relative_time,
};

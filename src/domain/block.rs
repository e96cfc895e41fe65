//! Block and indexer sync status types.
//!
//! Blocks are looked up by number; their transactions reuse
//! [`Transaction::from_json`]. The sync status tells how far the indexer
//! lags behind the chain.

use serde::Deserialize;
use serde_json::Value;

use super::error::ExplorerError;
use super::transaction::Transaction;
use super::transaction::parsing::{parse_transaction_list, strip_hex_prefix};

// ============================================================================
// Block
// ============================================================================

/// Block header fields the explorer displays.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    number: u64,
    hash: String,
    #[serde(default)]
    parent_hash: Option<String>,
    author: String,
    timestamp: u64,
    #[serde(default)]
    transactions: Vec<Value>,
}

/// A block with its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block number.
    pub number: u64,
    /// Block hash, without `0x`.
    pub hash: String,
    /// Parent block hash, when the indexer supplies it.
    pub parent_hash: Option<String>,
    /// Platform address of the block author.
    pub author: String,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Transactions in block order. Malformed records are skipped.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Parse a block from an indexer JSON record.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Parse` if the header fields are missing or
    /// have the wrong type.
    pub fn from_json(block_json: &Value) -> Result<Self, ExplorerError> {
        let raw = RawBlock::deserialize(block_json)
            .map_err(|e| ExplorerError::parse(format!("invalid block record: {e}")))?;

        Ok(Self {
            number: raw.number,
            hash: strip_hex_prefix(&raw.hash).to_string(),
            parent_hash: raw
                .parent_hash
                .as_deref()
                .map(|h| strip_hex_prefix(h).to_string()),
            author: raw.author,
            timestamp: raw.timestamp,
            transactions: parse_transaction_list(&raw.transactions),
        })
    }
}

// ============================================================================
// Sync Status
// ============================================================================

/// Indexer progress relative to the chain tip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub codechain_best_block_number: u64,
    pub codechain_best_block_hash: String,
    pub indexed_block_number: u64,
    pub indexed_block_hash: String,
}

impl SyncStatus {
    /// Whether the indexer has caught up with the chain tip.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.indexed_block_number >= self.codechain_best_block_number
            && strip_hex_prefix(&self.indexed_block_hash)
                == strip_hex_prefix(&self.codechain_best_block_hash)
    }

    /// Number of blocks the indexer still has to process.
    #[must_use]
    pub const fn blocks_behind(&self) -> u64 {
        self.codechain_best_block_number
            .saturating_sub(self.indexed_block_number)
    }

    /// One-line summary, e.g. "indexed #10 / best #12".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "indexed #{} / best #{}",
            self.indexed_block_number, self.codechain_best_block_number
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

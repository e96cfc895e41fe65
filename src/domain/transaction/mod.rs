//! Transaction types for the CodeChain indexer.
//!
//! This module defines the `Transaction` record shared by every variant and
//! the closed set of variant payloads.
//!
//! # Module Organization
//!
//! - [`types`] - Variant payload structs (PayDetails, TransferAssetDetails, etc.)
//! - [`parsing`] - JSON parsing logic for transactions

use chrono::{DateTime, Utc};

pub mod parsing;
pub mod types;

pub use types::{
    AssetOutPoint, AssetTransferInput, AssetTransferOutput, ComposeAssetDetails,
    DecomposeAssetDetails, MintAssetDetails, PayDetails, SetRegularKeyDetails, StoreDetails,
    TransactionDetails, TransferAssetDetails,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Format how long ago a unix timestamp was, relative to `now`.
///
/// # Returns
///
/// A string such as "just now", "5 minutes ago" or "3 days ago".
#[must_use]
pub fn format_relative_time(timestamp_secs: u64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::from_timestamp(timestamp_secs as i64, 0) else {
        return "Unknown".to_string();
    };

    let elapsed = now.signed_duration_since(then);
    let secs = elapsed.num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    let (amount, unit) = match secs {
        0..=44 => return "just now".to_string(),
        45..=3_599 => ((secs + 30) / 60, "minute"),
        3_600..=86_399 => (elapsed.num_hours(), "hour"),
        86_400..=2_591_999 => (elapsed.num_days(), "day"),
        2_592_000..=31_535_999 => (elapsed.num_days() / 30, "month"),
        _ => (elapsed.num_days() / 365, "year"),
    };

    let amount = amount.max(1);
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

// ============================================================================
// Transaction Type
// ============================================================================

/// Known transaction tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    Pay,
    SetRegularKey,
    Store,
    MintAsset,
    TransferAsset,
    ComposeAsset,
    DecomposeAsset,
}

impl TxType {
    /// All known tags in display order.
    pub const ALL: [Self; 7] = [
        Self::Pay,
        Self::SetRegularKey,
        Self::Store,
        Self::MintAsset,
        Self::TransferAsset,
        Self::ComposeAsset,
        Self::DecomposeAsset,
    ];

    /// The `type` tag used on the wire.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Pay => "pay",
            Self::SetRegularKey => "setRegularKey",
            Self::Store => "store",
            Self::MintAsset => "mintAsset",
            Self::TransferAsset => "transferAsset",
            Self::ComposeAsset => "composeAsset",
            Self::DecomposeAsset => "decomposeAsset",
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pay => "Pay",
            Self::SetRegularKey => "Set Regular Key",
            Self::Store => "Store",
            Self::MintAsset => "Mint Asset",
            Self::TransferAsset => "Transfer Asset",
            Self::ComposeAsset => "Compose Asset",
            Self::DecomposeAsset => "Decompose Asset",
        }
    }

    /// Look up a wire tag. Returns `None` for tags outside the closed set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Transaction Status
// ============================================================================

/// Inclusion status of a transaction.
///
/// The transaction index and outcome only exist once the transaction has
/// left the pending pool, so they live inside the non-pending variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// Still in the pending pool.
    Pending,
    /// Included and succeeded.
    Confirmed {
        /// Position within the block.
        transaction_index: u64,
    },
    /// Included and failed.
    Failed {
        /// Position within the block.
        transaction_index: u64,
        /// Indexer-provided failure reason.
        error_hint: String,
    },
}

impl TxStatus {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Transaction index, if the transaction is not pending.
    #[must_use]
    pub const fn transaction_index(&self) -> Option<u64> {
        match self {
            Self::Pending => None,
            Self::Confirmed { transaction_index } | Self::Failed { transaction_index, .. } => {
                Some(*transaction_index)
            }
        }
    }

    /// Short status badge text.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed { .. } => "Confirmed",
            Self::Failed { .. } => "Failed",
        }
    }

    /// Invoice line for included transactions: "Success" or "Fail - <hint>".
    #[must_use]
    pub fn invoice(&self) -> Option<String> {
        match self {
            Self::Pending => None,
            Self::Confirmed { .. } => Some("Success".to_string()),
            Self::Failed { error_hint, .. } => Some(format!("Fail - {error_hint}")),
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction snapshot as served by the indexer.
///
/// Instances are immutable once parsed; a new fetch produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction hash, without `0x`.
    pub hash: String,
    /// Block number, `None` while pending.
    pub block_number: Option<u64>,
    /// Signer sequence number.
    pub seq: u64,
    /// Fee in quark.
    pub fee: String,
    /// Signer platform address.
    pub signer: String,
    pub network_id: String,
    pub status: TxStatus,
    /// Unix timestamp in seconds, when the indexer knows it.
    pub timestamp: Option<u64>,
    /// Variant payload.
    pub details: TransactionDetails,
}

impl Transaction {
    /// The known type of this transaction, or `None` for unknown tags.
    #[must_use]
    pub const fn tx_type(&self) -> Option<TxType> {
        match &self.details {
            TransactionDetails::Pay(_) => Some(TxType::Pay),
            TransactionDetails::SetRegularKey(_) => Some(TxType::SetRegularKey),
            TransactionDetails::Store(_) => Some(TxType::Store),
            TransactionDetails::MintAsset(_) => Some(TxType::MintAsset),
            TransactionDetails::TransferAsset(_) => Some(TxType::TransferAsset),
            TransactionDetails::ComposeAsset(_) => Some(TxType::ComposeAsset),
            TransactionDetails::DecomposeAsset(_) => Some(TxType::DecomposeAsset),
            TransactionDetails::Unknown { .. } => None,
        }
    }

    /// The wire tag, including unknown ones.
    #[must_use]
    pub fn tag(&self) -> &str {
        match &self.details {
            TransactionDetails::Unknown { tag } => tag,
            _ => self.tx_type().map_or("", |t| t.tag()),
        }
    }

    /// Badge label; unknown tags are shown as received.
    #[must_use]
    pub fn type_label(&self) -> &str {
        match self.tx_type() {
            Some(t) => t.label(),
            None => self.tag(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

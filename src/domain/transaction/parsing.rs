//! Transaction parsing from JSON.
//!
//! This module converts indexer transaction records into [`Transaction`]
//! values. Records that break the shape contract (a known tag without its
//! payload, a non-pending record without its index or outcome) are rejected
//! with [`ExplorerError::Parse`] instead of being patched over.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::ExplorerError;

use super::types::{
    ComposeAssetDetails, DecomposeAssetDetails, MintAssetDetails, PayDetails,
    SetRegularKeyDetails, StoreDetails, TransactionDetails, TransferAssetDetails, quantity,
};
use super::{Transaction, TxStatus, TxType};

// ============================================================================
// Raw Record
// ============================================================================

/// Fields shared by every transaction record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    hash: String,
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    block_number: Option<u64>,
    #[serde(default)]
    transaction_index: Option<u64>,
    seq: u64,
    #[serde(deserialize_with = "quantity")]
    fee: String,
    signer: String,
    network_id: String,
    #[serde(default)]
    is_pending: bool,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error_hint: Option<String>,
    #[serde(default)]
    timestamp: Option<u64>,
}

// ============================================================================
// Transaction Parsing
// ============================================================================

impl Transaction {
    /// Parse a Transaction from an indexer JSON record.
    ///
    /// # Arguments
    ///
    /// * `tx_json` - The JSON representation of the transaction
    ///
    /// # Returns
    ///
    /// A `Result` containing the parsed `Transaction` or an `ExplorerError`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Parse` if common fields are missing, if a known
    /// tag has no valid payload, or if a non-pending record lacks
    /// `transactionIndex` or `success`.
    pub fn from_json(tx_json: &Value) -> Result<Self, ExplorerError> {
        let raw = RawTransaction::deserialize(tx_json)
            .map_err(|e| ExplorerError::parse(format!("invalid transaction record: {e}")))?;

        let hash = strip_hex_prefix(&raw.hash).to_string();
        let status = parse_status(&raw)?;
        let details = parse_details(tx_json, &raw.tag, &hash)?;

        Ok(Self {
            hash,
            block_number: raw.block_number,
            seq: raw.seq,
            fee: raw.fee,
            signer: raw.signer,
            network_id: raw.network_id,
            status,
            timestamp: raw.timestamp,
            details,
        })
    }
}

// ============================================================================
// Extraction Functions
// ============================================================================

/// Strip an optional `0x` prefix from a hash.
#[must_use]
pub fn strip_hex_prefix(hash: &str) -> &str {
    hash.strip_prefix("0x").unwrap_or(hash)
}

fn parse_status(raw: &RawTransaction) -> Result<TxStatus, ExplorerError> {
    if raw.is_pending {
        return Ok(TxStatus::Pending);
    }

    let transaction_index = raw.transaction_index.ok_or_else(|| {
        ExplorerError::parse(format!(
            "transaction {} is not pending but has no transactionIndex",
            raw.hash
        ))
    })?;
    let success = raw.success.ok_or_else(|| {
        ExplorerError::parse(format!(
            "transaction {} is not pending but has no success flag",
            raw.hash
        ))
    })?;

    if success {
        Ok(TxStatus::Confirmed { transaction_index })
    } else {
        Ok(TxStatus::Failed {
            transaction_index,
            error_hint: raw.error_hint.clone().unwrap_or_default(),
        })
    }
}

fn parse_details(tx_json: &Value, tag: &str, hash: &str) -> Result<TransactionDetails, ExplorerError> {
    let Some(tx_type) = TxType::from_tag(tag) else {
        tracing::debug!("Transaction {hash} has unknown type '{tag}'");
        return Ok(TransactionDetails::Unknown {
            tag: tag.to_string(),
        });
    };

    let payload = tx_json.get(tag).filter(|v| v.is_object()).ok_or_else(|| {
        ExplorerError::parse(format!("transaction {hash} of type '{tag}' has no '{tag}' payload"))
    })?;

    let details = match tx_type {
        TxType::Pay => payload_as::<PayDetails>(payload, tag, hash).map(TransactionDetails::Pay),
        TxType::SetRegularKey => payload_as::<SetRegularKeyDetails>(payload, tag, hash)
            .map(TransactionDetails::SetRegularKey),
        TxType::Store => {
            payload_as::<StoreDetails>(payload, tag, hash).map(TransactionDetails::Store)
        }
        TxType::MintAsset => {
            payload_as::<MintAssetDetails>(payload, tag, hash).map(TransactionDetails::MintAsset)
        }
        TxType::TransferAsset => payload_as::<TransferAssetDetails>(payload, tag, hash)
            .map(TransactionDetails::TransferAsset),
        TxType::ComposeAsset => payload_as::<ComposeAssetDetails>(payload, tag, hash)
            .map(TransactionDetails::ComposeAsset),
        TxType::DecomposeAsset => payload_as::<DecomposeAssetDetails>(payload, tag, hash)
            .map(TransactionDetails::DecomposeAsset),
    }?;

    Ok(details)
}

fn payload_as<T>(payload: &Value, tag: &str, hash: &str) -> Result<T, ExplorerError>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(payload)
        .map_err(|e| ExplorerError::parse(format!("invalid '{tag}' payload in {hash}: {e}")))
}

/// Parse a list of transaction records, skipping the malformed ones.
///
/// Used for list pages, where one bad record should not hide the others.
#[must_use]
pub fn parse_transaction_list(records: &[Value]) -> Vec<Transaction> {
    records
        .iter()
        .filter_map(|record| match Transaction::from_json(record) {
            Ok(tx) => Some(tx),
            Err(e) => {
                tracing::warn!("Skipping transaction record: {e}");
                None
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

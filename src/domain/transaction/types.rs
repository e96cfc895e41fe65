//! Variant-specific transaction payloads.
//!
//! Each struct mirrors the payload object the indexer nests under the
//! transaction's `type` key. Quantities stay decimal strings because they may
//! exceed native integer range; byte sequences accept the encodings the
//! indexer has been seen to emit.

use data_encoding::HEXLOWER_PERMISSIVE;
use serde::{Deserialize, Deserializer, de};

// ============================================================================
// Transaction Details
// ============================================================================

/// Variant payload of a transaction. Exactly one exists per transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionDetails {
    /// `pay`
    Pay(PayDetails),
    /// `setRegularKey`
    SetRegularKey(SetRegularKeyDetails),
    /// `store`
    Store(StoreDetails),
    /// `mintAsset`
    MintAsset(MintAssetDetails),
    /// `transferAsset`
    TransferAsset(TransferAssetDetails),
    /// `composeAsset`
    ComposeAsset(ComposeAssetDetails),
    /// `decomposeAsset`
    DecomposeAsset(DecomposeAssetDetails),
    /// A tag this explorer does not know about. Rendered with common fields only.
    Unknown {
        /// The tag as received.
        tag: String,
    },
}

// ============================================================================
// Platform Payloads
// ============================================================================

/// `pay` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayDetails {
    /// Amount in quark.
    #[serde(deserialize_with = "quantity")]
    pub quantity: String,
    /// Receiving platform address.
    pub receiver: String,
}

/// `setRegularKey` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetRegularKeyDetails {
    /// New regular key.
    pub key: String,
}

/// `store` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreDetails {
    /// Stored text.
    pub content: String,
    /// Certifier address.
    pub certifier: String,
}

// ============================================================================
// Asset Payloads
// ============================================================================

/// `mintAsset` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintAssetDetails {
    pub lock_script_hash: String,
    #[serde(default, deserialize_with = "byte_sequences")]
    pub parameters: Vec<Vec<u8>>,
    pub asset_type: String,
    #[serde(default, deserialize_with = "optional_quantity")]
    pub supply: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    /// Raw metadata string, see [`crate::domain::AssetMetadata`].
    #[serde(default)]
    pub metadata: String,
}

/// Reference to the asset output being spent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOutPoint {
    /// Hash of the transaction that created the output.
    pub tracker: String,
    /// Output index within that transaction.
    pub index: u64,
    pub asset_type: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(deserialize_with = "quantity")]
    pub quantity: String,
}

/// One spent output plus its scripts. Also used for burns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransferInput {
    pub prev_out: AssetOutPoint,
    #[serde(default, deserialize_with = "bytes")]
    pub lock_script: Vec<u8>,
    #[serde(default, deserialize_with = "bytes")]
    pub unlock_script: Vec<u8>,
}

/// One created asset output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransferOutput {
    pub asset_type: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(deserialize_with = "quantity")]
    pub quantity: String,
    pub lock_script_hash: String,
    #[serde(default, deserialize_with = "byte_sequences")]
    pub parameters: Vec<Vec<u8>>,
}

/// `transferAsset` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferAssetDetails {
    pub inputs: Vec<AssetTransferInput>,
    pub outputs: Vec<AssetTransferOutput>,
    #[serde(default)]
    pub burns: Vec<AssetTransferInput>,
}

/// `composeAsset` payload. The single composed output is described inline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeAssetDetails {
    pub inputs: Vec<AssetTransferInput>,
    pub asset_type: String,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "quantity")]
    pub supply: String,
    pub lock_script_hash: String,
    #[serde(default, deserialize_with = "byte_sequences")]
    pub parameters: Vec<Vec<u8>>,
}

/// `decomposeAsset` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecomposeAssetDetails {
    pub input: AssetTransferInput,
    pub outputs: Vec<AssetTransferOutput>,
}

// ============================================================================
// Field Deserializers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Text(String),
    Number(u64),
}

impl From<RawQuantity> for String {
    fn from(raw: RawQuantity) -> Self {
        match raw {
            RawQuantity::Text(s) => s,
            RawQuantity::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytes {
    Array(Vec<u8>),
    Hex(String),
    Buffer { data: Vec<u8> },
}

impl RawBytes {
    fn into_bytes<E: de::Error>(self) -> Result<Vec<u8>, E> {
        match self {
            Self::Array(bytes) | Self::Buffer { data: bytes } => Ok(bytes),
            Self::Hex(hex) => {
                let digits = hex.strip_prefix("0x").unwrap_or(&hex);
                HEXLOWER_PERMISSIVE
                    .decode(digits.as_bytes())
                    .map_err(|e| E::custom(format!("invalid hex byte string '{hex}': {e}")))
            }
        }
    }
}

/// Accepts a JSON string or unsigned number.
pub(crate) fn quantity<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawQuantity::deserialize(deserializer).map(String::from)
}

fn optional_quantity<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawQuantity>::deserialize(deserializer).map(|q| q.map(String::from))
}

fn bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    RawBytes::deserialize(deserializer)?.into_bytes()
}

fn byte_sequences<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawBytes>::deserialize(deserializer)?
        .into_iter()
        .map(RawBytes::into_bytes)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

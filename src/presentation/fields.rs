//! Field descriptors produced by the variant plan.
//!
//! A [`Field`] pairs a fixed label with a display value. Values that point
//! at another explorer page carry a [`Route`] so front ends can style or
//! follow them.

use data_encoding::HEXLOWER;

use crate::constants::{P2PKH_BURN_LOCK_SCRIPT_HASH, P2PKH_LOCK_SCRIPT_HASH};

// ============================================================================
// Routes
// ============================================================================

/// Explorer page a field value links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Block(u64),
    PlatformAddress(String),
    AssetAddress(String),
    AssetType(String),
    Transaction(String),
}

impl Route {
    /// Path of the page, e.g. `/tx/0xab12`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Block(number) => format!("/block/{number}"),
            Self::PlatformAddress(address) => format!("/addr-platform/{address}"),
            Self::AssetAddress(address) => format!("/addr-asset/{address}"),
            Self::AssetType(asset_type) => format!("/asset/0x{asset_type}"),
            Self::Transaction(hash) => format!("/tx/0x{hash}"),
        }
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// Display value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// Text that links to another page.
    Link { text: String, route: Route },
    /// Multi-line value, one entry per line (e.g. parameters).
    Lines(Vec<String>),
    /// A CCC amount, already converted and suffixed with the unit.
    Amount(String),
}

impl FieldValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn link(text: impl Into<String>, route: Route) -> Self {
        Self::Link {
            text: text.into(),
            route,
        }
    }

    /// A link when `value` is present, otherwise the `absent` placeholder.
    #[must_use]
    pub fn optional_link(value: Option<&str>, absent: &str, route: fn(String) -> Route) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::link(v, route(v.to_string())),
            _ => Self::text(absent),
        }
    }

    /// Value rendered on a single line. Multi-line values are joined with
    /// newlines.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) | Self::Amount(text) | Self::Link { text, .. } => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }

    /// Route of a linked value.
    #[must_use]
    pub const fn route(&self) -> Option<&Route> {
        match self {
            Self::Link { route, .. } => Some(route),
            _ => None,
        }
    }
}

// ============================================================================
// Field Identity
// ============================================================================

/// Identity of a field. Each identity has one fixed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Type,
    Block,
    TransactionIndex,
    Sequence,
    Fee,
    Signer,
    NetworkId,
    Status,
    Invoice,
    InputCount,
    OutputCount,
    BurnCount,
    LockScriptHash,
    Parameters,
    AssetType,
    Quantity,
    Approver,
    Recipient,
    Receiver,
    Key,
    Content,
    Certifier,
    Owner,
    LockScript,
    UnlockScript,
    PrevTx,
    PrevTxIndex,
    Name,
    Description,
    Icon,
    RawData,
}

impl FieldId {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Block => "Block",
            Self::TransactionIndex => "Transaction Index",
            Self::Sequence => "Sequence",
            Self::Fee => "Fee",
            Self::Signer => "Signer",
            Self::NetworkId => "NetworkID",
            Self::Status => "Status",
            Self::Invoice => "Invoice",
            Self::InputCount => "# of Input",
            Self::OutputCount => "# of Output",
            Self::BurnCount => "# of Burn",
            Self::LockScriptHash => "LockScriptHash",
            Self::Parameters => "Parameters",
            Self::AssetType => "AssetType",
            Self::Quantity => "Quantity",
            Self::Approver => "Approver",
            Self::Recipient => "Recipient",
            Self::Receiver => "Receiver",
            Self::Key => "Key",
            Self::Content => "Content",
            Self::Certifier => "Certifier",
            Self::Owner => "Owner",
            Self::LockScript => "LockScript",
            Self::UnlockScript => "UnlockScript",
            Self::PrevTx => "Prev Tx",
            Self::PrevTxIndex => "Prev Tx Index",
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Icon => "Icon",
            Self::RawData => "Raw data",
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: FieldValue,
}

impl Field {
    #[must_use]
    pub const fn new(id: FieldId, value: FieldValue) -> Self {
        Self { id, value }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.id.label()
    }
}

// ============================================================================
// Value Helpers
// ============================================================================

/// Friendly label for a lock script hash.
///
/// The two standard scripts get their names; anything else is shown as
/// `0x<hash>`.
#[must_use]
pub fn lock_script_name(lock_script_hash: &str) -> String {
    match lock_script_hash {
        P2PKH_LOCK_SCRIPT_HASH => format!("P2PKH(0x{P2PKH_LOCK_SCRIPT_HASH})"),
        P2PKH_BURN_LOCK_SCRIPT_HASH => format!("P2PKHBurn(0x{P2PKH_BURN_LOCK_SCRIPT_HASH})"),
        other => format!("0x{other}"),
    }
}

/// One lowercase hex line per parameter.
#[must_use]
pub fn parameter_lines(parameters: &[Vec<u8>]) -> Vec<String> {
    parameters.iter().map(|p| HEXLOWER.encode(p)).collect()
}

/// Format an integer with comma thousands separators.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_with_commas(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

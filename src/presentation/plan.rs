//! Variant dispatch: which fields and sections a transaction shows.
//!
//! [`plan_variant`] is the single place that maps each transaction variant
//! to its summary fields and detail sections. Paged sections only carry
//! their collection and length; [`collection_item`] builds the fields of one
//! item on demand so hidden items are never formatted.

use crate::domain::amount::format_ccc;
use crate::domain::metadata::{ABSENT, AssetMetadata};
use crate::domain::{
    AssetTransferInput, AssetTransferOutput, FormatError, ScriptDecoder, Transaction,
    TransactionDetails,
};
use crate::state::anchor::Anchor;
use crate::state::disclosure::Collection;

use super::fields::{
    Field, FieldId, FieldValue, Route, format_with_commas, lock_script_name, parameter_lines,
};

/// Placeholder for missing owners and recipients.
pub const UNKNOWN: &str = "Unknown";

// ============================================================================
// Plan Types
// ============================================================================

/// Everything a detail view shows for one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPlan {
    /// Fields common to every variant.
    pub summary: Vec<Field>,
    /// Variant-specific summary fields, shown after the common ones.
    pub variant_summary: Vec<Field>,
    /// Sections shown below the summary.
    pub details: Vec<DetailSection>,
}

impl VariantPlan {
    /// Common and variant summary fields in display order.
    pub fn summary_fields(&self) -> impl Iterator<Item = &Field> {
        self.summary.iter().chain(self.variant_summary.iter())
    }
}

/// A section below the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSection {
    /// A titled flat group of fields.
    Group {
        title: &'static str,
        fields: Vec<Field>,
    },
    /// One addressable item with a fixed heading.
    Single {
        anchor: Anchor,
        heading: &'static str,
        fields: Vec<Field>,
    },
    /// A paged sub-collection; items are built with [`collection_item`].
    Paged { collection: Collection, len: usize },
}

// ============================================================================
// Dispatch
// ============================================================================

/// Build the field plan of `tx`.
///
/// # Errors
///
/// Returns [`FormatError`] if the fee or a CCC quantity is not a decimal
/// integer string.
pub fn plan_variant(
    tx: &Transaction,
    decoder: &dyn ScriptDecoder,
) -> Result<VariantPlan, FormatError> {
    let summary = summary_fields(tx)?;

    let (variant_summary, details) = match &tx.details {
        TransactionDetails::Pay(pay) => (
            vec![
                Field::new(FieldId::Quantity, FieldValue::Amount(format_ccc(&pay.quantity)?)),
                Field::new(
                    FieldId::Receiver,
                    FieldValue::link(&pay.receiver, Route::PlatformAddress(pay.receiver.clone())),
                ),
            ],
            Vec::new(),
        ),
        TransactionDetails::SetRegularKey(set) => (
            vec![Field::new(FieldId::Key, FieldValue::text(&set.key))],
            Vec::new(),
        ),
        TransactionDetails::Store(store) => (
            vec![
                Field::new(FieldId::Content, FieldValue::text(&store.content)),
                Field::new(
                    FieldId::Certifier,
                    FieldValue::link(&store.certifier, Route::AssetAddress(store.certifier.clone())),
                ),
            ],
            Vec::new(),
        ),
        TransactionDetails::MintAsset(mint) => {
            let metadata = AssetMetadata::parse(&mint.metadata);
            (
                vec![
                    Field::new(
                        FieldId::LockScriptHash,
                        FieldValue::text(lock_script_name(&mint.lock_script_hash)),
                    ),
                    Field::new(
                        FieldId::Parameters,
                        FieldValue::Lines(parameter_lines(&mint.parameters)),
                    ),
                    asset_type_field(&mint.asset_type),
                    Field::new(
                        FieldId::Quantity,
                        FieldValue::text(
                            mint.supply.as_deref().filter(|s| !s.is_empty()).unwrap_or("0"),
                        ),
                    ),
                    Field::new(
                        FieldId::Approver,
                        FieldValue::optional_link(
                            mint.approver.as_deref(),
                            ABSENT,
                            Route::PlatformAddress,
                        ),
                    ),
                    Field::new(
                        FieldId::Recipient,
                        FieldValue::optional_link(
                            mint.recipient.as_deref(),
                            UNKNOWN,
                            Route::AssetAddress,
                        ),
                    ),
                ],
                vec![DetailSection::Group {
                    title: "Metadata",
                    fields: vec![
                        Field::new(FieldId::Name, FieldValue::text(metadata.name_or_absent())),
                        Field::new(
                            FieldId::Description,
                            FieldValue::text(metadata.description_or_absent()),
                        ),
                        Field::new(FieldId::Icon, FieldValue::text(metadata.icon_url_or_absent())),
                        Field::new(FieldId::RawData, FieldValue::text(metadata.raw())),
                    ],
                }],
            )
        }
        TransactionDetails::TransferAsset(transfer) => (
            vec![
                count_field(FieldId::InputCount, transfer.inputs.len()),
                count_field(FieldId::OutputCount, transfer.outputs.len()),
                count_field(FieldId::BurnCount, transfer.burns.len()),
            ],
            vec![
                DetailSection::Paged {
                    collection: Collection::Input,
                    len: transfer.inputs.len(),
                },
                DetailSection::Paged {
                    collection: Collection::Burn,
                    len: transfer.burns.len(),
                },
                DetailSection::Paged {
                    collection: Collection::Output,
                    len: transfer.outputs.len(),
                },
            ],
        ),
        TransactionDetails::ComposeAsset(compose) => (
            vec![
                count_field(FieldId::InputCount, compose.inputs.len()),
                count_field(FieldId::OutputCount, 1),
            ],
            vec![
                DetailSection::Paged {
                    collection: Collection::Input,
                    len: compose.inputs.len(),
                },
                DetailSection::Single {
                    anchor: Anchor::new(Collection::Output, 0),
                    heading: "Output",
                    fields: vec![
                        asset_type_field(&compose.asset_type),
                        Field::new(
                            FieldId::Recipient,
                            FieldValue::optional_link(
                                compose.recipient.as_deref(),
                                UNKNOWN,
                                Route::AssetAddress,
                            ),
                        ),
                        Field::new(FieldId::Quantity, FieldValue::text(&compose.supply)),
                        Field::new(
                            FieldId::LockScriptHash,
                            FieldValue::text(lock_script_name(&compose.lock_script_hash)),
                        ),
                        Field::new(
                            FieldId::Parameters,
                            FieldValue::Lines(parameter_lines(&compose.parameters)),
                        ),
                    ],
                },
            ],
        ),
        TransactionDetails::DecomposeAsset(decompose) => (
            vec![
                count_field(FieldId::InputCount, 1),
                count_field(FieldId::OutputCount, decompose.outputs.len()),
            ],
            vec![
                DetailSection::Single {
                    anchor: Anchor::new(Collection::Input, 0),
                    heading: "Input",
                    fields: input_fields(&decompose.input, decoder),
                },
                DetailSection::Paged {
                    collection: Collection::Output,
                    len: decompose.outputs.len(),
                },
            ],
        ),
        TransactionDetails::Unknown { tag } => {
            tracing::debug!("No detail plan for transaction type '{tag}'");
            (Vec::new(), Vec::new())
        }
    };

    Ok(VariantPlan {
        summary,
        variant_summary,
        details,
    })
}

/// Fields of item `index` of a paged collection.
///
/// Returns `None` if `tx` has no such collection or the index is out of
/// range.
#[must_use]
pub fn collection_item(
    tx: &Transaction,
    collection: Collection,
    index: usize,
    decoder: &dyn ScriptDecoder,
) -> Option<Vec<Field>> {
    match (&tx.details, collection) {
        (TransactionDetails::TransferAsset(t), Collection::Input) => {
            t.inputs.get(index).map(|i| input_fields(i, decoder))
        }
        (TransactionDetails::TransferAsset(t), Collection::Burn) => {
            t.burns.get(index).map(|b| input_fields(b, decoder))
        }
        (TransactionDetails::TransferAsset(t), Collection::Output) => {
            t.outputs.get(index).map(output_fields)
        }
        (TransactionDetails::ComposeAsset(c), Collection::Input) => {
            c.inputs.get(index).map(|i| input_fields(i, decoder))
        }
        (TransactionDetails::DecomposeAsset(d), Collection::Output) => {
            d.outputs.get(index).map(output_fields)
        }
        _ => None,
    }
}

// ============================================================================
// Field Builders
// ============================================================================

fn summary_fields(tx: &Transaction) -> Result<Vec<Field>, FormatError> {
    let mut fields = Vec::with_capacity(9);

    fields.push(Field::new(FieldId::Type, FieldValue::text(tx.type_label())));
    fields.push(Field::new(
        FieldId::Block,
        match tx.block_number {
            Some(n) => FieldValue::link(n.to_string(), Route::Block(n)),
            None => FieldValue::text(ABSENT),
        },
    ));
    if let Some(index) = tx.status.transaction_index() {
        fields.push(Field::new(
            FieldId::TransactionIndex,
            FieldValue::text(format_with_commas(index)),
        ));
    }
    fields.push(Field::new(FieldId::Sequence, FieldValue::text(tx.seq.to_string())));
    fields.push(Field::new(FieldId::Fee, FieldValue::Amount(format_ccc(&tx.fee)?)));
    fields.push(Field::new(
        FieldId::Signer,
        FieldValue::link(&tx.signer, Route::PlatformAddress(tx.signer.clone())),
    ));
    fields.push(Field::new(FieldId::NetworkId, FieldValue::text(&tx.network_id)));
    fields.push(Field::new(FieldId::Status, FieldValue::text(tx.status.badge())));
    if let Some(invoice) = tx.status.invoice() {
        fields.push(Field::new(FieldId::Invoice, FieldValue::Text(invoice)));
    }

    Ok(fields)
}

fn count_field(id: FieldId, count: usize) -> Field {
    Field::new(id, FieldValue::text(format_with_commas(count as u64)))
}

fn asset_type_field(asset_type: &str) -> Field {
    Field::new(
        FieldId::AssetType,
        FieldValue::link(asset_type, Route::AssetType(asset_type.to_string())),
    )
}

fn owner_field(owner: Option<&str>) -> Field {
    Field::new(
        FieldId::Owner,
        FieldValue::optional_link(owner, UNKNOWN, Route::AssetAddress),
    )
}

fn input_fields(input: &AssetTransferInput, decoder: &dyn ScriptDecoder) -> Vec<Field> {
    let prev_out = &input.prev_out;
    vec![
        asset_type_field(&prev_out.asset_type),
        owner_field(prev_out.owner.as_deref()),
        Field::new(FieldId::Quantity, FieldValue::text(&prev_out.quantity)),
        Field::new(
            FieldId::LockScript,
            FieldValue::text(decoder.render(&input.lock_script)),
        ),
        Field::new(
            FieldId::UnlockScript,
            FieldValue::text(decoder.render(&input.unlock_script)),
        ),
        Field::new(
            FieldId::PrevTx,
            FieldValue::link(&prev_out.tracker, Route::Transaction(prev_out.tracker.clone())),
        ),
        Field::new(
            FieldId::PrevTxIndex,
            FieldValue::text(format_with_commas(prev_out.index)),
        ),
    ]
}

fn output_fields(output: &AssetTransferOutput) -> Vec<Field> {
    vec![
        asset_type_field(&output.asset_type),
        owner_field(output.owner.as_deref()),
        Field::new(FieldId::Quantity, FieldValue::text(&output.quantity)),
        Field::new(
            FieldId::LockScriptHash,
            FieldValue::text(lock_script_name(&output.lock_script_hash)),
        ),
        Field::new(
            FieldId::Parameters,
            FieldValue::Lines(parameter_lines(&output.parameters)),
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================

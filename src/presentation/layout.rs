//! Flattening a variant plan into display rows.
//!
//! The layout applies the disclosure limits, builds the fields of each
//! visible item and registers every rendered item's anchor against its row
//! index, so a pending scroll request can be resolved right after layout.

use crate::domain::{ScriptDecoder, Transaction};
use crate::state::anchor::{Anchor, SectionAddresses};
use crate::state::disclosure::{Collection, Disclosure};

use super::fields::{Field, FieldValue};
use super::plan::{DetailSection, VariantPlan, collection_item};

/// Title of the summary section.
pub const DETAILS_HEADING: &str = "Details";

// ============================================================================
// Types
// ============================================================================

/// A row in the flat detail list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRow {
    /// Section title ("Details", "Metadata").
    Heading(String),
    /// Title of one addressable item ("Input #3", "Output").
    ItemHeading { title: String, anchor: Anchor },
    /// Labelled value.
    Field(Field),
    /// "Load ..." action for a partly revealed collection.
    LoadMore {
        collection: Collection,
        remaining: usize,
    },
}

impl DetailRow {
    /// Number of terminal lines the row occupies.
    #[must_use]
    pub fn line_count(&self) -> usize {
        match self {
            Self::Field(field) => match &field.value {
                FieldValue::Lines(lines) => lines.len().max(1),
                other => other.display().lines().count().max(1),
            },
            _ => 1,
        }
    }
}

/// Rows plus the anchor of every rendered item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailLayout {
    pub rows: Vec<DetailRow>,
    /// Anchor to row index.
    pub addresses: SectionAddresses<usize>,
}

impl DetailLayout {
    /// Terminal line where row `row` starts.
    #[must_use]
    pub fn line_offset(&self, row: usize) -> usize {
        self.rows.iter().take(row).map(DetailRow::line_count).sum()
    }

    /// Total terminal lines of all rows.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.rows.iter().map(DetailRow::line_count).sum()
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Lay out `plan` for `tx` with the current disclosure state.
#[must_use]
pub fn build_rows(
    tx: &Transaction,
    plan: &VariantPlan,
    disclosure: &Disclosure,
    decoder: &dyn ScriptDecoder,
) -> DetailLayout {
    let mut layout = DetailLayout::default();

    layout.rows.push(DetailRow::Heading(DETAILS_HEADING.to_string()));
    layout
        .rows
        .extend(plan.summary_fields().cloned().map(DetailRow::Field));

    for section in &plan.details {
        match section {
            DetailSection::Group { title, fields } => {
                layout.rows.push(DetailRow::Heading((*title).to_string()));
                layout.rows.extend(fields.iter().cloned().map(DetailRow::Field));
            }
            DetailSection::Single {
                anchor,
                heading,
                fields,
            } => {
                push_item(&mut layout, *anchor, (*heading).to_string(), fields.clone());
            }
            DetailSection::Paged { collection, len } => {
                let visible = disclosure.visible(*collection, *len);
                for index in 0..visible {
                    let Some(fields) = collection_item(tx, *collection, index, decoder) else {
                        tracing::debug!("{collection}-{index} missing from {}", tx.hash);
                        continue;
                    };
                    let title = format!("{} #{index}", collection.heading());
                    push_item(&mut layout, Anchor::new(*collection, index), title, fields);
                }
                if visible < *len {
                    layout.rows.push(DetailRow::LoadMore {
                        collection: *collection,
                        remaining: len - visible,
                    });
                }
            }
        }
    }

    layout
}

fn push_item(layout: &mut DetailLayout, anchor: Anchor, title: String, fields: Vec<Field>) {
    layout.addresses.register(anchor, layout.rows.len());
    layout.rows.push(DetailRow::ItemHeading { title, anchor });
    layout.rows.extend(fields.into_iter().map(DetailRow::Field));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HexScriptDecoder;
    use crate::presentation::plan::plan_variant;
    use crate::state::anchor::SectionRequest;
    use crate::test_utils::TransactionMother;

    fn layout_for(tx: &Transaction, disclosure: &Disclosure) -> DetailLayout {
        let plan = plan_variant(tx, &HexScriptDecoder).unwrap();
        build_rows(tx, &plan, disclosure, &HexScriptDecoder)
    }

    fn item_titles(layout: &DetailLayout) -> Vec<String> {
        layout
            .rows
            .iter()
            .filter_map(|row| match row {
                DetailRow::ItemHeading { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_page_only() {
        let tx = TransactionMother::transfer_asset("a5", 8, 10, 0);
        let layout = layout_for(&tx, &Disclosure::new());

        let titles = item_titles(&layout);
        assert_eq!(titles.len(), 12);
        assert_eq!(titles[0], "Input #0");
        assert_eq!(titles[5], "Input #5");
        assert_eq!(titles[6], "Output #0");

        let load_more: Vec<_> = layout
            .rows
            .iter()
            .filter(|row| matches!(row, DetailRow::LoadMore { .. }))
            .collect();
        assert_eq!(
            load_more,
            vec![
                &DetailRow::LoadMore {
                    collection: Collection::Input,
                    remaining: 2
                },
                &DetailRow::LoadMore {
                    collection: Collection::Output,
                    remaining: 4
                },
            ]
        );
    }

    #[test]
    fn test_reveal_more_adds_rows_and_anchors() {
        let tx = TransactionMother::transfer_asset("a5", 8, 1, 0);
        let mut disclosure = Disclosure::new();
        disclosure.reveal_more(Collection::Input);

        let layout = layout_for(&tx, &disclosure);
        assert_eq!(item_titles(&layout).len(), 9);
        assert!(layout.addresses.resolve(&Anchor::new(Collection::Input, 7)).is_some());
        assert!(
            !layout
                .rows
                .iter()
                .any(|row| matches!(row, DetailRow::LoadMore { .. }))
        );
    }

    #[test]
    fn test_anchor_resolution_within_revealed_range() {
        let tx = TransactionMother::transfer_asset("a5", 1, 20, 0);
        let layout = layout_for(&tx, &Disclosure::new());

        let mut request = SectionRequest::default();
        request.request("output-2".parse().unwrap());
        let row = request.consume(&layout.addresses).unwrap();
        assert_eq!(
            layout.rows[row],
            DetailRow::ItemHeading {
                title: "Output #2".to_string(),
                anchor: Anchor::new(Collection::Output, 2)
            }
        );
    }

    #[test]
    fn test_anchor_beyond_revealed_range_is_not_found() {
        let tx = TransactionMother::transfer_asset("a5", 1, 20, 0);
        let disclosure = Disclosure::new();
        let layout = layout_for(&tx, &disclosure);

        let mut request = SectionRequest::default();
        request.request("output-9".parse().unwrap());
        assert_eq!(request.consume(&layout.addresses), None);
        assert_eq!(request.pending(), None);
        // The failed request does not reveal anything.
        assert_eq!(disclosure.cursor(Collection::Output), 1);
    }

    #[test]
    fn test_compose_output_is_addressable() {
        let tx = TransactionMother::compose_asset("a6", 1);
        let layout = layout_for(&tx, &Disclosure::new());

        assert!(layout.addresses.resolve(&Anchor::new(Collection::Output, 0)).is_some());
        assert!(layout.addresses.resolve(&Anchor::new(Collection::Input, 0)).is_some());
        assert_eq!(item_titles(&layout), vec!["Input #0", "Output"]);
    }

    #[test]
    fn test_line_offsets_count_multiline_fields() {
        let tx = TransactionMother::mint_asset("a4", "{}");
        let layout = layout_for(&tx, &Disclosure::new());

        let params_row = layout
            .rows
            .iter()
            .position(|row| matches!(row, DetailRow::Field(f) if f.label() == "Parameters"))
            .unwrap();
        assert_eq!(layout.rows[params_row].line_count(), 2);
        assert_eq!(
            layout.line_offset(params_row + 1),
            layout.line_offset(params_row) + 2
        );
        assert_eq!(layout.total_lines(), layout.line_offset(layout.rows.len()));
    }
}

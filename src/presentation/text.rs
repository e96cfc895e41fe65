//! Plain-text rendering for the command line.
//!
//! The terminal UI draws the same rows with ratatui; this module turns them
//! into lines suitable for piping.

use chrono::{DateTime, Utc};

use crate::domain::amount::quark_to_ccc;
use crate::domain::{Block, SyncStatus, Transaction, format_relative_time};

use super::fields::{FieldValue, format_with_commas};
use super::layout::{DetailLayout, DetailRow};

const VALUE_INDENT: &str = "  ";

// ============================================================================
// Detail View
// ============================================================================

/// Render a detail layout as plain text.
#[must_use]
pub fn render_detail(layout: &DetailLayout) -> String {
    let mut lines: Vec<String> = Vec::new();

    for row in &layout.rows {
        match row {
            DetailRow::Heading(title) => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(title.clone());
                lines.push("=".repeat(title.chars().count()));
            }
            DetailRow::ItemHeading { title, .. } => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(title.clone());
                lines.push("-".repeat(title.chars().count()));
            }
            DetailRow::Field(field) => match &field.value {
                FieldValue::Lines(values) => {
                    lines.push(format!("{}:", field.label()));
                    lines.extend(values.iter().map(|v| format!("{VALUE_INDENT}{v}")));
                }
                value => {
                    let text = value.display();
                    let mut parts = text.lines();
                    let first = parts.next().unwrap_or_default();
                    lines.push(format!("{}: {first}", field.label()));
                    lines.extend(parts.map(|p| format!("{VALUE_INDENT}{p}")));
                }
            },
            DetailRow::LoadMore {
                collection,
                remaining,
            } => {
                lines.push(format!(
                    "[Load {}] {remaining} more, use --reveal {collection}",
                    collection.heading()
                ));
            }
        }
    }

    lines.join("\n")
}

// ============================================================================
// List View
// ============================================================================

/// Fee column text. Malformed fees are shown as received.
fn fee_cell(fee: &str) -> String {
    quark_to_ccc(fee).unwrap_or_else(|e| {
        tracing::debug!("Showing raw fee: {e}");
        fee.to_string()
    })
}

/// Render one page of transactions as an aligned table.
#[must_use]
pub fn render_list(transactions: &[Transaction], now: DateTime<Utc>) -> String {
    let header = ["Type", "Hash", "Fee CCC", "Signer", "Last seen"].map(String::from);
    let rows: Vec<[String; 5]> = transactions
        .iter()
        .map(|tx| {
            [
                tx.type_label().to_string(),
                format!("0x{}", tx.hash),
                fee_cell(&tx.fee),
                tx.signer.clone(),
                tx.timestamp
                    .map_or_else(|| "Pending".to_string(), |ts| format_relative_time(ts, now)),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Page X of Y" line for a list page.
#[must_use]
pub fn render_pager(page: u64, max_page: Option<u64>, items_per_page: u64) -> String {
    let of = max_page.map_or_else(|| "?".to_string(), format_with_commas);
    format!(
        "Page {} of {of} | Show {items_per_page} entries",
        format_with_commas(page)
    )
}

// ============================================================================
// Block and Status
// ============================================================================

/// Render a block header followed by its transactions.
#[must_use]
pub fn render_block(block: &Block, now: DateTime<Utc>) -> String {
    let mut out = vec![
        format!("Block #{}", format_with_commas(block.number)),
        format!("Hash: 0x{}", block.hash),
    ];
    if let Some(parent) = &block.parent_hash {
        out.push(format!("Parent: 0x{parent}"));
    }
    out.push(format!("Author: {}", block.author));
    out.push(format!(
        "Time: {}",
        format_relative_time(block.timestamp, now)
    ));
    out.push(format!(
        "Transactions: {}",
        format_with_commas(block.transactions.len() as u64)
    ));
    if !block.transactions.is_empty() {
        out.push(String::new());
        out.push(render_list(&block.transactions, now));
    }
    out.join("\n")
}

/// Render the indexer sync status.
#[must_use]
pub fn render_sync_status(status: &SyncStatus) -> String {
    let state = if status.is_synced() {
        "synced".to_string()
    } else {
        format!("{} blocks behind", format_with_commas(status.blocks_behind()))
    };
    format!(
        "Best block:    #{} (0x{})\nIndexed block: #{} (0x{})\nStatus: {state}",
        status.codechain_best_block_number,
        status.codechain_best_block_hash.trim_start_matches("0x"),
        status.indexed_block_number,
        status.indexed_block_hash.trim_start_matches("0x"),
    )
}

// ============================================================================
// Tests
// ============================================================================

//! Transaction list panel.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::constants::HASH_COLUMN_WIDTH;
use crate::domain::amount::quark_to_ccc;
use crate::domain::{Transaction, TxStatus, format_relative_time};
use crate::presentation::text::render_pager;
use crate::state::ListState;
use crate::theme::{
    ERROR_COLOR, HEADING_STYLE, HIGHLIGHT_STYLE, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR,
};
use crate::ui::helpers::{create_border_block, truncate_middle};

/// Render the list screen: the table and the pager line below it.
pub fn render(frame: &mut Frame, area: Rect, list: &ListState, now: DateTime<Utc>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = create_border_block("Transactions", true);

    if !list.loaded {
        let text = if list.loading { "Loading…" } else { "No data" };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, chunks[0]);
    } else if list.transactions.is_empty() {
        let placeholder = Paragraph::new("No transactions")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, chunks[0]);
    } else {
        let rows = list.transactions.iter().map(|tx| transaction_row(tx, now));
        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(HASH_COLUMN_WIDTH as u16),
                Constraint::Length(20),
                Constraint::Min(12),
                Constraint::Length(16),
            ],
        )
        .header(Row::new(["Type", "Hash", "Fee CCC", "Signer", "Last seen"]).style(HEADING_STYLE))
        .row_highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ")
        .block(block);

        let mut state = TableState::default().with_selected(Some(list.selected));
        frame.render_stateful_widget(table, chunks[0], &mut state);
    }

    let query = list.navigator.query;
    let mut pager = render_pager(
        query.page,
        list.navigator.max_page(),
        query.items_per_page.value(),
    );
    if list.loading && list.loaded {
        pager.push_str("  (loading…)");
    }
    frame.render_widget(
        Paragraph::new(Line::from(pager)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn transaction_row(tx: &Transaction, now: DateTime<Utc>) -> Row<'static> {
    let status_color = match tx.status {
        TxStatus::Pending => WARNING_COLOR,
        TxStatus::Confirmed { .. } => SUCCESS_COLOR,
        TxStatus::Failed { .. } => ERROR_COLOR,
    };
    let fee = quark_to_ccc(&tx.fee).unwrap_or_else(|_| tx.fee.clone());
    let last_seen = tx
        .timestamp
        .map_or_else(|| "Pending".to_string(), |ts| format_relative_time(ts, now));

    Row::new([
        Cell::from(tx.type_label().to_string()).style(Style::default().fg(status_color)),
        Cell::from(truncate_middle(&format!("0x{}", tx.hash), HASH_COLUMN_WIDTH)),
        Cell::from(fee),
        Cell::from(tx.signer.clone()),
        Cell::from(last_seen),
    ])
}

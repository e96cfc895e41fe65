//! Header rendering: application name, indexer and sync status.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::APP_NAME;
use crate::domain::SyncStatus;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.config.indexer_url),
            Style::default().fg(MUTED_COLOR),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), inner);
    frame.render_widget(
        Paragraph::new(sync_line(app.sync_status.as_ref())).alignment(Alignment::Right),
        inner,
    );
}

/// Sync indicator: green when the indexer has caught up, yellow otherwise.
fn sync_line(status: Option<&SyncStatus>) -> Line<'static> {
    match status {
        None => Line::from(Span::styled(
            "sync: unknown",
            Style::default().fg(MUTED_COLOR),
        )),
        Some(status) if status.is_synced() => Line::from(Span::styled(
            format!("● {}", status.summary()),
            Style::default().fg(SUCCESS_COLOR),
        )),
        Some(status) => Line::from(Span::styled(
            format!("◌ {} ({} behind)", status.summary(), status.blocks_behind()),
            Style::default().fg(WARNING_COLOR),
        )),
    }
}

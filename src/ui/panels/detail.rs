//! Transaction detail panel.
//!
//! Rows are drawn one terminal line per [`DetailRow::line_count`], so the
//! line offsets the layout reports match the paragraph scroll position.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::presentation::{DetailRow, FieldValue};
use crate::state::DetailState;
use crate::theme::{
    ACCENT_COLOR, HEADING_STYLE, LABEL_STYLE, LINK_STYLE, MUTED_COLOR, PRIMARY_COLOR,
};
use crate::ui::helpers::create_border_block;

const VALUE_INDENT: &str = "    ";

/// Render the detail screen.
pub fn render(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let title = detail
        .hash
        .as_ref()
        .map_or_else(|| "Transaction".to_string(), |hash| format!("Transaction 0x{hash}"));
    let block = create_border_block(&title, true);

    let Some(view) = &detail.view else {
        let text = if detail.loading {
            "Loading…"
        } else if detail.not_found {
            "Transaction not found"
        } else {
            "No data"
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = detail_lines(view.rows());
    let total = lines.len();
    let scroll = u16::try_from(detail.scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);

    let visible = usize::from(area.height.saturating_sub(2));
    if total > visible {
        let mut state = ScrollbarState::new(total).position(detail.scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// Lines of `rows`, one per layout line.
#[must_use]
pub fn detail_lines(rows: &[DetailRow]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in rows {
        match row {
            DetailRow::Heading(title) => {
                lines.push(Line::from(Span::styled(title.clone(), HEADING_STYLE)));
            }
            DetailRow::ItemHeading { title, .. } => {
                lines.push(Line::from(Span::styled(
                    format!("  {title}"),
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            DetailRow::Field(field) => {
                let style = value_style(&field.value);
                let text = match &field.value {
                    FieldValue::Lines(values) => values.clone(),
                    value => value.display().lines().map(String::from).collect(),
                };
                let mut values = text.into_iter();

                let label = Span::styled(format!("  {}: ", field.label()), LABEL_STYLE);
                lines.push(Line::from(vec![
                    label,
                    Span::styled(values.next().unwrap_or_default(), style),
                ]));
                lines.extend(
                    values.map(|v| Line::from(Span::styled(format!("{VALUE_INDENT}{v}"), style))),
                );
            }
            DetailRow::LoadMore {
                collection,
                remaining,
            } => {
                let key = collection.as_str().chars().next().unwrap_or(' ');
                lines.push(Line::from(Span::styled(
                    format!("  [{key}] Load {} ({remaining} more)", collection.heading()),
                    Style::default().fg(ACCENT_COLOR),
                )));
            }
        }
    }

    lines
}

fn value_style(value: &FieldValue) -> Style {
    match value {
        FieldValue::Link { .. } => LINK_STYLE,
        FieldValue::Amount(_) => Style::default().add_modifier(Modifier::BOLD),
        FieldValue::Text(_) | FieldValue::Lines(_) => Style::default(),
    }
}

// ============================================================================
// Tests
// ============================================================================

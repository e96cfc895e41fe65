//! Helpers for consistently styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

/// Creates a bordered block styled by focus state.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block is the active one
///
/// # Returns
///
/// A `Block` with double borders and a marker when focused, rounded
/// borders otherwise.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

/// Shortens `text` to `max` characters, keeping both ends.
#[must_use]
pub fn truncate_middle(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max || max < 3 {
        return text.to_string();
    }
    let keep = max - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let start: String = text.chars().take(head).collect();
    let end: String = text.chars().skip(len - tail).collect();
    format!("{start}…{end}")
}

// ============================================================================
// Tests
// ============================================================================

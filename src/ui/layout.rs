//! Layout calculations for the explorer screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Areas of the top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Split the terminal into header, content and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// A `width` x `height` rectangle centered in `parent`, shrunk to leave a
/// margin if `parent` is too small.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_app_layout_heights() {
        let layout = calculate_app_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.content.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 23);
    }

    #[rstest]
    #[case::fits(Rect::new(0, 0, 80, 24), 40, 5, Rect::new(20, 9, 40, 5))]
    #[case::too_wide(Rect::new(0, 0, 30, 24), 40, 5, Rect::new(2, 9, 26, 5))]
    #[case::offset_parent(Rect::new(10, 10, 20, 20), 10, 4, Rect::new(15, 18, 10, 4))]
    fn test_centered_popup_area(
        #[case] parent: Rect,
        #[case] width: u16,
        #[case] height: u16,
        #[case] expected: Rect,
    ) {
        assert_eq!(centered_popup_area(parent, width, height), expected);
    }
}

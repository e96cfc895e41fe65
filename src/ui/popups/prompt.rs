//! "Go to section" prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const PROMPT_WIDTH: u16 = 44;
const PROMPT_HEIGHT: u16 = 4;

/// Renders the prompt with the text typed so far.
pub fn render(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup_area(area, PROMPT_WIDTH, PROMPT_HEIGHT);
    let block = create_popup_block("Go to section");

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(PRIMARY_COLOR)),
            Span::raw(input.to_string()),
            Span::styled("_", Style::default().fg(PRIMARY_COLOR)),
        ]),
        Line::from(Span::styled(
            "input-N, output-N or burn-N",
            Style::default().fg(MUTED_COLOR),
        )),
    ];

    frame.render_widget(Clear, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

//! Footer bar with key hints or the current status message.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::{MUTED_COLOR, WARNING_COLOR};

/// Key hints for `context`.
#[must_use]
pub const fn key_hints(context: InputContext) -> &'static str {
    match context {
        InputContext::List => {
            "q:Quit  ↑↓:Select  Enter:Open  ←→:Page  Home/End:First/Last  s:Page size  r:Reload"
        }
        InputContext::Detail => {
            "Esc:Back  ↑↓/PgUp/PgDn:Scroll  i/o/b:Load more  g:Go to section  c:Copy hash  r:Reload"
        }
        InputContext::JumpPrompt => "Enter:Go  Esc:Cancel",
    }
}

/// Renders the footer.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.status_message {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(WARNING_COLOR)),
        None => Paragraph::new(key_hints(app.input_context()))
            .style(Style::default().fg(MUTED_COLOR)),
    };

    frame.render_widget(footer.alignment(Alignment::Center), area);
}

//! UI rendering for the explorer TUI.
//!
//! - `panels` - List and detail screens
//! - `popups` - The "go to section" prompt
//! - `layout` - Layout calculations
//! - `header` - Application name and sync status
//! - `footer` - Key hints and status messages
//! - `helpers` - Styled block builders

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use chrono::Utc;
use ratatui::Frame;

use crate::state::{App, Screen};

/// Draw the whole screen for `app`.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, app);
    match app.screen {
        Screen::List => panels::list::render(frame, areas.content, &app.list, Utc::now()),
        Screen::Detail => panels::detail::render(frame, areas.content, &app.detail),
    }
    footer::render(frame, areas.footer, app);

    if app.input_context().accepts_text_input()
        && let Some(input) = &app.prompt
    {
        popups::prompt::render(frame, size, input);
    }
}

// ============================================================================
// Tests
// ============================================================================

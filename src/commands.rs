//! Command pattern for key event handling.
//!
//! Key input is translated to [`AppCommand`]s by [`KeyMapper`] according to
//! the current [`InputContext`], keeping key bindings testable apart from
//! the state they act on.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! let requests = app.handle_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{Collection, NavAction};

// ============================================================================
// Input Context
// ============================================================================

/// Which set of key bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the paged transaction list.
    List,
    /// Viewing one transaction.
    Detail,
    /// Typing a section name such as `output-3`.
    JumpPrompt,
}

impl InputContext {
    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::JumpPrompt)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Leave the detail screen.
    Back,
    /// Fetch the current page or transaction again.
    Reload,

    // === List ===
    MoveUp,
    MoveDown,
    /// Open the selected transaction.
    Open,
    Navigate(NavAction),
    CyclePageSize,

    // === Detail ===
    /// Show the next page of a collection.
    Reveal(Collection),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    OpenJumpPrompt,
    CopyHash,

    // === Prompt ===
    TypeChar(char),
    Backspace,
    SubmitPrompt,
    Dismiss,

    /// No operation.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command for the given context.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::List => Self::map_list_keys(key),
            InputContext::Detail => Self::map_detail_keys(key),
            InputContext::JumpPrompt => Self::map_prompt_keys(key),
        }
    }

    fn map_list_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Char('s') => AppCommand::CyclePageSize,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Open,
            KeyCode::Home => AppCommand::Navigate(NavAction::First),
            KeyCode::Left => AppCommand::Navigate(NavAction::Prev),
            KeyCode::Right => AppCommand::Navigate(NavAction::Next),
            KeyCode::End => AppCommand::Navigate(NavAction::Last),
            _ => AppCommand::Noop,
        }
    }

    fn map_detail_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Esc | KeyCode::Backspace => AppCommand::Back,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Char('i') => AppCommand::Reveal(Collection::Input),
            KeyCode::Char('o') => AppCommand::Reveal(Collection::Output),
            KeyCode::Char('b') => AppCommand::Reveal(Collection::Burn),
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollDown,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown => AppCommand::PageDown,
            KeyCode::Char('g') => AppCommand::OpenJumpPrompt,
            KeyCode::Char('c') => AppCommand::CopyHash,
            _ => AppCommand::Noop,
        }
    }

    fn map_prompt_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitPrompt,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppCommand::Quit)]
    #[case::reload(KeyCode::Char('r'), AppCommand::Reload)]
    #[case::page_size(KeyCode::Char('s'), AppCommand::CyclePageSize)]
    #[case::up(KeyCode::Up, AppCommand::MoveUp)]
    #[case::down(KeyCode::Down, AppCommand::MoveDown)]
    #[case::open(KeyCode::Enter, AppCommand::Open)]
    #[case::first(KeyCode::Home, AppCommand::Navigate(NavAction::First))]
    #[case::prev(KeyCode::Left, AppCommand::Navigate(NavAction::Prev))]
    #[case::next(KeyCode::Right, AppCommand::Navigate(NavAction::Next))]
    #[case::last(KeyCode::End, AppCommand::Navigate(NavAction::Last))]
    #[case::unbound(KeyCode::Char('x'), AppCommand::Noop)]
    fn test_list_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(KeyMapper::map_key(key(code), &InputContext::List), expected);
    }

    #[rstest]
    #[case::back(KeyCode::Esc, AppCommand::Back)]
    #[case::reveal_input(KeyCode::Char('i'), AppCommand::Reveal(Collection::Input))]
    #[case::reveal_output(KeyCode::Char('o'), AppCommand::Reveal(Collection::Output))]
    #[case::reveal_burn(KeyCode::Char('b'), AppCommand::Reveal(Collection::Burn))]
    #[case::scroll_up(KeyCode::Up, AppCommand::ScrollUp)]
    #[case::page_down(KeyCode::PageDown, AppCommand::PageDown)]
    #[case::jump(KeyCode::Char('g'), AppCommand::OpenJumpPrompt)]
    #[case::copy(KeyCode::Char('c'), AppCommand::CopyHash)]
    #[case::enter_is_unbound(KeyCode::Enter, AppCommand::Noop)]
    fn test_detail_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(KeyMapper::map_key(key(code), &InputContext::Detail), expected);
    }

    #[rstest]
    #[case::letter(KeyCode::Char('q'), AppCommand::TypeChar('q'))]
    #[case::dash(KeyCode::Char('-'), AppCommand::TypeChar('-'))]
    #[case::submit(KeyCode::Enter, AppCommand::SubmitPrompt)]
    #[case::cancel(KeyCode::Esc, AppCommand::Dismiss)]
    #[case::backspace(KeyCode::Backspace, AppCommand::Backspace)]
    fn test_prompt_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(KeyMapper::map_key(key(code), &InputContext::JumpPrompt), expected);
    }

    #[rstest]
    fn test_ctrl_c_quits_everywhere(
        #[values(InputContext::List, InputContext::Detail, InputContext::JumpPrompt)]
        context: InputContext,
    ) {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(ctrl_c, &context), AppCommand::Quit);
    }

    #[test]
    fn test_only_prompt_accepts_text() {
        assert!(InputContext::JumpPrompt.accepts_text_input());
        assert!(!InputContext::List.accepts_text_input());
        assert!(!InputContext::Detail.accepts_text_input());
    }
}
